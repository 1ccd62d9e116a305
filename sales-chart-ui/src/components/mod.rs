//! Reusable Dioxus RSX components for the sales dashboard.

mod chart_container;
mod chart_header;
mod date_range_picker;
mod error_display;
mod extremes_table;
mod loading_spinner;
mod multi_select;
mod tab_bar;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use extremes_table::ExtremesTable;
pub use loading_spinner::LoadingSpinner;
pub use multi_select::MultiSelect;
pub use tab_bar::TabBar;
