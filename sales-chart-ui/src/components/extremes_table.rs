//! Max/min record tables shown under each chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ExtremesTableProps {
    /// View title, used in the table captions
    pub title: String,
    /// Column headers shared by both rows
    pub headers: Vec<String>,
    /// Name of the metric column ("Sales" / "Profit")
    pub metric_label: String,
    /// The single maximum row, one cell per header
    pub max_row: Vec<String>,
    /// The single minimum row, one cell per header
    pub min_row: Vec<String>,
}

fn extreme_table(caption: String, headers: &[String], row: &[String]) -> Element {
    rsx! {
        div {
            style: "margin: 12px 0;",
            h4 {
                style: "margin: 0 0 4px 0; font-size: 13px;",
                "{caption}"
            }
            table {
                style: "border-collapse: collapse; font: 12px system-ui, sans-serif;",
                thead {
                    tr {
                        for h in headers.iter() {
                            th {
                                style: "border: 1px solid #ccc; padding: 3px 10px; background: #fafafa; text-align: left;",
                                "{h}"
                            }
                        }
                    }
                }
                tbody {
                    tr {
                        for cell in row.iter() {
                            td {
                                style: "border: 1px solid #ccc; padding: 3px 10px;",
                                "{cell}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The "Maximum X" / "Minimum X" table pair for a view. Callers render
/// it only when the view has data; an empty view shows "no data" instead.
#[component]
pub fn ExtremesTable(props: ExtremesTableProps) -> Element {
    rsx! {
        div {
            {extreme_table(
                format!("{} - Maximum {}", props.title, props.metric_label),
                &props.headers,
                &props.max_row,
            )}
            {extreme_table(
                format!("{} - Minimum {}", props.title, props.metric_label),
                &props.headers,
                &props.min_row,
            )}
        }
    }
}
