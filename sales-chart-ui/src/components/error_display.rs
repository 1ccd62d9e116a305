//! Error banner for dataset failures.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shown when the embedded sales CSV fails to load or parse. There is
/// no retry path for a bad dataset, so this replaces the page body.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Sales data error: " }
            "{props.message}"
        }
    }
}
