//! Checkbox multi-select for one categorical filter dimension.

use dioxus::prelude::*;
use std::collections::BTreeSet;

#[derive(Props, Clone, PartialEq)]
pub struct MultiSelectProps {
    /// Dimension label shown above the list
    pub label: String,
    /// All distinct values of the dimension (full-dataset order)
    pub options: Vec<String>,
    /// The selected set; written directly so the parent recomputes
    pub selected: Signal<BTreeSet<String>>,
}

/// Checkbox list with All/None shortcuts.
///
/// Deselecting everything is allowed and means "match nothing" -- there
/// is no implicit fallback to all values.
#[component]
pub fn MultiSelect(props: MultiSelectProps) -> Element {
    let mut selected = props.selected;
    let current = selected.read().clone();

    let all_options = props.options.clone();
    let on_all = move |_| {
        selected.set(all_options.iter().cloned().collect());
    };
    let on_none = move |_| {
        selected.set(BTreeSet::new());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "display: flex; gap: 8px; align-items: baseline;",
                span {
                    style: "font-weight: bold;",
                    "{props.label}"
                }
                button {
                    style: "font-size: 11px;",
                    onclick: on_all,
                    "All"
                }
                button {
                    style: "font-size: 11px;",
                    onclick: on_none,
                    "None"
                }
            }
            div {
                style: "max-height: 150px; overflow-y: auto; border: 1px solid #e0e0e0; border-radius: 4px; padding: 4px 8px; margin-top: 4px;",
                for option in props.options.iter() {
                    {
                        let value = option.clone();
                        let checked = current.contains(&value);
                        let toggle_value = value.clone();
                        rsx! {
                            label {
                                key: "{value}",
                                style: "display: block; font-size: 13px; cursor: pointer;",
                                input {
                                    r#type: "checkbox",
                                    checked: checked,
                                    onchange: move |_| {
                                        let mut next = selected.read().clone();
                                        if !next.remove(&toggle_value) {
                                            next.insert(toggle_value.clone());
                                        }
                                        selected.set(next);
                                    },
                                }
                                " {value}"
                            }
                        }
                    }
                }
            }
        }
    }
}
