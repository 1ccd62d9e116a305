//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");
static DATA_TABLE_JS: &str = include_str!("../assets/js/data-table.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Sales JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderBarChart(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via indirect eval once D3 is ready, and then
/// explicitly promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        LINE_CHART_JS,
        BAR_CHART_JS,
        SCATTER_CHART_JS,
        DATA_TABLE_JS,
    ]
    .join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__salesChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__salesChartScripts);
                    delete window.__salesChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof renderDataTable !== 'undefined') window.renderDataTable = renderDataTable;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__salesChartsReady = true;
                    console.log('Sales charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

fn render_via(function_name: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__salesChartsReady &&
                    typeof window.{function_name} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function_name}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[Sales] {function_name} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a time-series line chart (sales over time).
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_via("renderLineChart", container_id, data_json, config_json);
}

/// Render a grouped bar chart (all sum-by-dimension views).
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_via("renderBarChart", container_id, data_json, config_json);
}

/// Render a scatter chart (sales vs discount).
pub fn render_scatter_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_via("renderScatterChart", container_id, data_json, config_json);
}

/// Render the raw filtered-records table.
pub fn render_data_table(container_id: &str, data_json: &str, config_json: &str) {
    render_via("renderDataTable", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
