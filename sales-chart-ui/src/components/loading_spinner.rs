//! Loading indicator for the initial dataset parse.

use dioxus::prelude::*;

/// Shown between mount and the first parse of the embedded sales CSV.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading sales data..."
        }
    }
}
