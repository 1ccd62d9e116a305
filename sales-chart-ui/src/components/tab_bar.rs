//! Tab bar for switching between the nine dashboard views.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TabBarProps {
    /// View titles, in tab order
    pub titles: Vec<String>,
}

/// Horizontal tab strip; writes the active index into AppState.
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_tab)();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 4px; border-bottom: 2px solid #e0e0e0; margin: 12px 0;",
            for (i, title) in props.titles.iter().enumerate() {
                {
                    let is_active = i == active;
                    let style = if is_active {
                        "padding: 6px 12px; border: none; border-bottom: 2px solid #2196F3; margin-bottom: -2px; background: none; font-weight: bold; color: #2196F3; cursor: pointer;"
                    } else {
                        "padding: 6px 12px; border: none; background: none; color: #444; cursor: pointer;"
                    };
                    rsx! {
                        button {
                            key: "{i}",
                            style: "{style}",
                            onclick: move |_| state.active_tab.set(i),
                            "{title}"
                        }
                    }
                }
            }
        }
    }
}
