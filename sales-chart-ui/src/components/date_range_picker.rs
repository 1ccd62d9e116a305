//! Inclusive order-date range inputs.

use crate::state::AppState;
use dioxus::prelude::*;

/// Start/end inputs for the order-date filter, laid out like the
/// multi-select widgets (dimension label above the controls).
///
/// No start<=end validation: an inverted range just produces an empty
/// filtered table downstream.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();

    let on_start_change = move |evt: Event<FormData>| {
        state.start_date.set(evt.value());
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            span {
                style: "font-weight: bold;",
                "Order Date"
            }
            div {
                style: "display: flex; gap: 12px; align-items: center; margin-top: 4px;",
                label {
                    style: "font-size: 13px;",
                    "From: "
                    input {
                        r#type: "date",
                        value: "{start}",
                        onchange: on_start_change,
                    }
                }
                label {
                    style: "font-size: 13px;",
                    "To: "
                    input {
                        r#type: "date",
                        value: "{end}",
                        onchange: on_end_change,
                    }
                }
            }
        }
    }
}
