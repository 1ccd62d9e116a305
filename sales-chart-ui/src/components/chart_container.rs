//! Container div the D3 sales views render into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the active view's chart is drawn into
    pub id: String,
    /// Whether the dataset is still being parsed
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height; defaults to the dashboard's view height, which
    /// leaves room for the scatter legend and rotated bar labels
    #[props(default = 460)]
    pub min_height: u32,
}

/// Reserves vertical space for a sales view so the page does not jump
/// when D3 swaps the chart on a tab or filter change.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Rendering view..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
