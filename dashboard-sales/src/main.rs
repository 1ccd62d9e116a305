//! Supermart Retail Sales Analytics Dashboard
//!
//! Loads the embedded sales CSV once on mount, exposes multi-select and
//! date-range filters, and renders nine tabbed aggregation views as
//! D3.js charts with max/min record tables plus the raw filtered table.
//!
//! Data flow:
//! 1. `build.rs` copies `supermart_sales.csv` into OUT_DIR at compile time.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount: parse into a `Dataset`, derive filter options, select all.
//! 4. On any filter or tab change: recompute the filtered table and the
//!    active view, re-render via D3.js. Pure recomputation, no caching.

use chrono::NaiveDate;
use dioxus::prelude::*;
use sales_analytics::{
    extremes, filter_records, record_extremes, scatter_points, AggregateRow, ChartKind,
    FilterOptions, FilterSelection, ViewSpec, VIEWS,
};
use sales_chart_ui::components::{
    ChartContainer, ChartHeader, DateRangePicker, ErrorDisplay, ExtremesTable, LoadingSpinner,
    MultiSelect, TabBar,
};
use sales_chart_ui::js_bridge;
use sales_chart_ui::state::AppState;
use sales_data::{Dataset, Record};

// Embed the sales dataset at compile time.
const SALES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/supermart_sales.csv"));

/// DOM id for the active view's D3 chart container div.
const CHART_CONTAINER_ID: &str = "sales-view-chart";
/// DOM id for the raw filtered-records table.
const TABLE_CONTAINER_ID: &str = "filtered-records-table";
/// Cap on rows sent to the DOM table; filtering still applies to all rows.
const MAX_TABLE_ROWS: usize = 500;

/// Column headers of the raw record table, in display order.
const RECORD_COLUMNS: &[&str] = &[
    "Order Date",
    "Category",
    "Sub Category",
    "City",
    "Region",
    "Customer Name",
    "Sales",
    "Profit",
    "Discount",
];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sales-dashboard-root"))
        .launch(App);
}

/// Display rows for the max/min tables under a chart.
#[derive(Clone, PartialEq)]
struct ExtremeRows {
    headers: Vec<String>,
    metric_label: String,
    max_row: Vec<String>,
    min_row: Vec<String>,
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn record_cells(record: &Record) -> Vec<String> {
    vec![
        record.order_date.map(format_date).unwrap_or_default(),
        record.category.clone(),
        record.sub_category.clone(),
        record.city.clone(),
        record.region.clone(),
        record.customer.clone(),
        format!("{:.2}", record.sales),
        format!("{:.2}", record.profit),
        format!("{:.2}", record.discount),
    ]
}

fn aggregate_extremes_rows(view: &ViewSpec, max: &AggregateRow, min: &AggregateRow) -> ExtremeRows {
    let mut headers: Vec<String> = view.group_by.iter().map(|d| d.label().to_string()).collect();
    headers.push(view.metric.label().to_string());
    let row = |r: &AggregateRow| {
        let mut cells = r.keys.clone();
        cells.push(format!("{:.2}", r.value));
        cells
    };
    ExtremeRows {
        headers,
        metric_label: view.metric.label().to_string(),
        max_row: row(max),
        min_row: row(min),
    }
}

fn record_extremes_rows(view: &ViewSpec, max: &Record, min: &Record) -> ExtremeRows {
    ExtremeRows {
        headers: RECORD_COLUMNS.iter().map(|c| c.to_string()).collect(),
        metric_label: view.metric.label().to_string(),
        max_row: record_cells(max),
        min_row: record_cells(min),
    }
}

/// Rebuild the typed selection from the widget signals. Unparseable
/// date strings become `None` bounds, which match nothing.
fn selection_from_state(state: &AppState) -> FilterSelection {
    FilterSelection {
        categories: state.selected_categories.read().clone(),
        sub_categories: state.selected_sub_categories.read().clone(),
        cities: state.selected_cities.read().clone(),
        years: state
            .selected_years
            .read()
            .iter()
            .filter_map(|y| y.parse().ok())
            .collect(),
        months: state.selected_months.read().clone(),
        start_date: NaiveDate::parse_from_str(&(state.start_date)(), "%Y-%m-%d").ok(),
        end_date: NaiveDate::parse_from_str(&(state.end_date)(), "%Y-%m-%d").ok(),
    }
}

/// Render the active view's chart and return its extremes display rows,
/// or `None` when the view has no data.
fn render_active_view(view: &ViewSpec, filtered: &[&Record]) -> Option<ExtremeRows> {
    if view.is_raw() {
        let points = scatter_points(filtered);
        let data_json = serde_json::to_string(&points).unwrap_or_default();
        let config_json = serde_json::json!({
            "title": view.title,
            "xAxisLabel": "Discount",
            "yAxisLabel": view.metric.label(),
        })
        .to_string();
        js_bridge::render_scatter_chart(CHART_CONTAINER_ID, &data_json, &config_json);
        let (max, min) = record_extremes(filtered, view.metric)?;
        return Some(record_extremes_rows(view, max, min));
    }

    let rows = view.compute(filtered);
    let d3_data: Vec<serde_json::Value> = rows
        .iter()
        .map(|r| {
            serde_json::json!({
                "key": r.key_label(),
                "value": r.value,
            })
        })
        .collect();
    let data_json = serde_json::to_string(&d3_data).unwrap_or_default();
    let config_json = serde_json::json!({
        "title": view.title,
        "yAxisLabel": view.metric.label(),
        "color": "#2196F3",
    })
    .to_string();
    match view.chart {
        ChartKind::Line => js_bridge::render_line_chart(CHART_CONTAINER_ID, &data_json, &config_json),
        _ => js_bridge::render_bar_chart(CHART_CONTAINER_ID, &data_json, &config_json),
    }
    let (max, min) = extremes(&rows)?;
    Some(aggregate_extremes_rows(view, max, min))
}

/// Render the raw filtered table (capped at [`MAX_TABLE_ROWS`] rows).
fn render_filtered_table(filtered: &[&Record]) {
    let rows: Vec<serde_json::Value> = filtered
        .iter()
        .take(MAX_TABLE_ROWS)
        .map(|r| {
            let cells = record_cells(r);
            let mut obj = serde_json::Map::new();
            for (col, cell) in RECORD_COLUMNS.iter().zip(cells) {
                obj.insert(col.to_string(), serde_json::Value::String(cell));
            }
            serde_json::Value::Object(obj)
        })
        .collect();
    let caption = if filtered.len() > MAX_TABLE_ROWS {
        format!(
            "{} matching records (showing first {})",
            filtered.len(),
            MAX_TABLE_ROWS
        )
    } else {
        format!("{} matching records", filtered.len())
    };
    let data_json = serde_json::to_string(&rows).unwrap_or_default();
    let config_json = serde_json::json!({
        "columns": RECORD_COLUMNS,
        "caption": caption,
    })
    .to_string();
    js_bridge::render_data_table(TABLE_CONTAINER_ID, &data_json, &config_json);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut filtered_count: Signal<Option<usize>> = use_signal(|| None);
    let mut extreme_rows: Signal<Option<ExtremeRows>> = use_signal(|| None);

    // ─── Effect 1: Parse the embedded CSV once on mount ───
    use_effect(move || {
        match Dataset::from_csv_str(SALES_CSV) {
            Ok(dataset) => {
                let options = FilterOptions::from_dataset(&dataset);
                let selection = FilterSelection::all(&options);
                state.selected_categories.set(selection.categories);
                state
                    .selected_sub_categories
                    .set(selection.sub_categories);
                state.selected_cities.set(selection.cities);
                state
                    .selected_years
                    .set(options.years.iter().map(|y| y.to_string()).collect());
                state.selected_months.set(selection.months);
                state
                    .start_date
                    .set(selection.start_date.map(format_date).unwrap_or_default());
                state
                    .end_date
                    .set(selection.end_date.map(format_date).unwrap_or_default());
                state.options.set(Some(options));
                state.dataset.set(Some(dataset));
                state.loading.set(false);

                // Initialize D3 chart scripts (one-time)
                js_bridge::init_charts();
            }
            Err(e) => {
                // Fatal to the session: no partial rendering.
                state.error_msg.set(Some(format!("Failed to load dataset: {e}")));
                state.loading.set(false);
            }
        }
    });

    // ─── Effect 2: Recompute filtered table + active view on change ───
    // Re-runs whenever loading, any filter signal, or the tab changes.
    use_effect(move || {
        let loading = (state.loading)();
        let selection = selection_from_state(&state);
        let tab = (state.active_tab)();

        if loading {
            return;
        }
        // Clone the dataset out of the signal immediately so the read
        // borrow doesn't interfere with Dioxus signal tracking.
        let Some(dataset) = state.dataset.read().clone() else {
            return;
        };

        let filtered = filter_records(&dataset, &selection);
        filtered_count.set(Some(filtered.len()));

        if filtered.is_empty() {
            extreme_rows.set(None);
            js_bridge::destroy_chart(CHART_CONTAINER_ID);
            js_bridge::destroy_chart(TABLE_CONTAINER_ID);
            return;
        }

        // Only the active tab's view is computed. Every view derives
        // from the same filtered table, and a tab switch re-runs this
        // effect, so inactive views can never render stale data.
        let view = &VIEWS[tab.min(VIEWS.len() - 1)];
        extreme_rows.set(render_active_view(view, &filtered));
        render_filtered_table(&filtered);
    });

    // ─── Render ───
    let active_tab = (state.active_tab)();
    let view = &VIEWS[active_tab.min(VIEWS.len() - 1)];
    let no_data = *filtered_count.read() == Some(0);

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 {
                style: "margin: 8px 0;",
                "Supermart Sales Analytics"
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            } else if *state.loading.read() {
                LoadingSpinner {}
            } else {
                FilterPanel {}

                TabBar {
                    titles: VIEWS.iter().map(|v| v.title.to_string()).collect::<Vec<_>>(),
                }

                ChartHeader {
                    title: view.title.to_string(),
                    metric_description: format!("Sum of {}", view.metric.label()),
                }

                if no_data {
                    div {
                        style: "padding: 32px; text-align: center; color: #666;",
                        "No data for the current filter selection."
                    }
                } else {
                    ChartContainer {
                        id: CHART_CONTAINER_ID.to_string(),
                        loading: *state.loading.read(),
                    }

                    if let Some(rows) = extreme_rows.read().as_ref() {
                        ExtremesTable {
                            title: view.title.to_string(),
                            headers: rows.headers.clone(),
                            metric_label: rows.metric_label.clone(),
                            max_row: rows.max_row.clone(),
                            min_row: rows.min_row.clone(),
                        }
                    }
                }

                h3 {
                    style: "margin: 16px 0 4px 0; font-size: 15px;",
                    "Filtered Data"
                }
                div {
                    id: "{TABLE_CONTAINER_ID}",
                    style: "max-height: 400px; overflow-y: auto;",
                }
            }
        }
    }
}

/// Sidebar-style panel with the five multi-selects and the date range.
#[component]
fn FilterPanel() -> Element {
    let state = use_context::<AppState>();
    let options = state.options.read().clone();
    let Some(options) = options else {
        return rsx! { div {} };
    };

    rsx! {
        div {
            style: "border: 1px solid #e0e0e0; border-radius: 6px; padding: 8px 12px;",
            h3 {
                style: "margin: 4px 0; font-size: 15px;",
                "Filters"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 8px;",
                MultiSelect {
                    label: "Categories".to_string(),
                    options: options.categories.clone(),
                    selected: state.selected_categories,
                }
                MultiSelect {
                    label: "Sub-Categories".to_string(),
                    options: options.sub_categories.clone(),
                    selected: state.selected_sub_categories,
                }
                MultiSelect {
                    label: "Cities".to_string(),
                    options: options.cities.clone(),
                    selected: state.selected_cities,
                }
                MultiSelect {
                    label: "Years".to_string(),
                    options: options.years.iter().map(|y| y.to_string()).collect::<Vec<_>>(),
                    selected: state.selected_years,
                }
                MultiSelect {
                    label: "Months".to_string(),
                    options: options.months.clone(),
                    selected: state.selected_months,
                }
            }
            p {
                style: "font-size: 12px; color: #666; margin: 8px 0 0 0;",
                "Adjust the date range to filter the data:"
            }
            DateRangePicker {}
        }
    }
}
