//! The declarative catalog of the nine dashboard views.
//!
//! Every view is the same shape: group the filtered table by some
//! dimensions and sum a metric. The one exception is the scatter view,
//! which plots raw records (sales against discount) and takes its
//! extremes from the records themselves.

use crate::aggregate::{aggregate, AggregateRow, Dimension, Metric};
use sales_data::Record;

/// How a view is drawn by the chart bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Scatter,
}

/// One dashboard view: grouping dimensions, metric, chart type.
#[derive(Debug, Clone, Copy)]
pub struct ViewSpec {
    /// Stable id, also used as the chart container DOM id suffix.
    pub id: &'static str,
    pub title: &'static str,
    pub chart: ChartKind,
    /// Empty for the scatter view, which uses raw records.
    pub group_by: &'static [Dimension],
    pub metric: Metric,
}

impl ViewSpec {
    /// True for the raw-record scatter view; its data comes from
    /// `scatter_points`/`record_extremes`, not from [`ViewSpec::compute`].
    pub fn is_raw(&self) -> bool {
        self.chart == ChartKind::Scatter
    }

    /// Aggregate rows for this view over the filtered table.
    pub fn compute(&self, records: &[&Record]) -> Vec<AggregateRow> {
        if self.is_raw() {
            return Vec::new();
        }
        aggregate(records, self.group_by, self.metric)
    }
}

/// The nine views, in tab order.
pub const VIEWS: [ViewSpec; 9] = [
    ViewSpec {
        id: "sales-over-time",
        title: "Sales Over Time",
        chart: ChartKind::Line,
        group_by: &[Dimension::OrderDate],
        metric: Metric::Sales,
    },
    ViewSpec {
        id: "sales-by-category",
        title: "Sales by Category",
        chart: ChartKind::Bar,
        group_by: &[Dimension::Category],
        metric: Metric::Sales,
    },
    ViewSpec {
        id: "sales-by-city",
        title: "Sales by City",
        chart: ChartKind::Bar,
        group_by: &[Dimension::City],
        metric: Metric::Sales,
    },
    ViewSpec {
        id: "sales-vs-discount",
        title: "Sales vs Discount",
        chart: ChartKind::Scatter,
        group_by: &[],
        metric: Metric::Sales,
    },
    ViewSpec {
        id: "customer-orders",
        title: "Customer Orders",
        chart: ChartKind::Bar,
        group_by: &[Dimension::Customer, Dimension::Year, Dimension::Category],
        metric: Metric::Sales,
    },
    ViewSpec {
        id: "sales-by-month",
        title: "Sales by Month",
        chart: ChartKind::Bar,
        group_by: &[Dimension::Month],
        metric: Metric::Sales,
    },
    ViewSpec {
        id: "sales-by-subcategory",
        title: "Sales by Sub-Category",
        chart: ChartKind::Bar,
        group_by: &[Dimension::SubCategory],
        metric: Metric::Sales,
    },
    ViewSpec {
        id: "sales-by-region",
        title: "Sales by Region",
        chart: ChartKind::Bar,
        group_by: &[Dimension::Region],
        metric: Metric::Sales,
    },
    ViewSpec {
        id: "profit-by-customer",
        title: "Profit by Customer",
        chart: ChartKind::Bar,
        group_by: &[Dimension::Customer],
        metric: Metric::Profit,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::extremes;
    use crate::filter::{filter_records, FilterOptions, FilterSelection};
    use sales_data::Dataset;

    fn sample_dataset() -> Dataset {
        let csv = "\
Order Date,Category,Sub Category,City,Region,Customer Name,Sales,Profit,Discount
2022-01-01,Cat A,Sub 1,City X,North,Amrish,100,20,0.10
2022-01-02,Cat A,Sub 2,City Y,South,Verma,50,5,0.20
";
        Dataset::from_csv_str(csv).unwrap()
    }

    #[test]
    fn nine_views_in_tab_order() {
        assert_eq!(VIEWS.len(), 9);
        assert_eq!(VIEWS[0].id, "sales-over-time");
        assert_eq!(VIEWS[3].chart, ChartKind::Scatter);
        assert!(VIEWS[3].is_raw());
        assert_eq!(VIEWS[8].metric, Metric::Profit);
    }

    #[test]
    fn city_view_after_city_filter() {
        // Filtering to City X leaves one record; the city view then has
        // a single row of 100, which is both max and min.
        let ds = sample_dataset();
        let opts = FilterOptions::from_dataset(&ds);
        let mut sel = FilterSelection::all(&opts);
        sel.cities = ["City X".to_string()].into_iter().collect();
        let filtered = filter_records(&ds, &sel);
        assert_eq!(filtered.len(), 1);

        let city_view = VIEWS.iter().find(|v| v.id == "sales-by-city").unwrap();
        let rows = city_view.compute(&filtered);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].keys, vec!["City X"]);
        assert!((rows[0].value - 100.0).abs() < 1e-9);

        let (max, min) = extremes(&rows).unwrap();
        assert_eq!(max, min);
    }

    #[test]
    fn every_grouped_view_conserves_its_metric() {
        let ds = sample_dataset();
        let records: Vec<&sales_data::Record> = ds.records().iter().collect();
        for view in VIEWS.iter().filter(|v| !v.is_raw()) {
            let rows = view.compute(&records);
            let agg_total: f64 = rows.iter().map(|r| r.value).sum();
            let table_total: f64 = records.iter().map(|r| view.metric.value_of(r)).sum();
            assert!(
                (agg_total - table_total).abs() < 1e-9,
                "{} does not conserve {}",
                view.id,
                view.metric.label()
            );
        }
    }

    #[test]
    fn empty_table_means_no_data_everywhere() {
        let ds = sample_dataset();
        let opts = FilterOptions::from_dataset(&ds);
        let mut sel = FilterSelection::all(&opts);
        sel.years.clear();
        let filtered = filter_records(&ds, &sel);
        assert!(filtered.is_empty());
        for view in VIEWS.iter().filter(|v| !v.is_raw()) {
            let rows = view.compute(&filtered);
            assert!(rows.is_empty(), "{} should report no data", view.id);
            assert!(extremes(&rows).is_none());
        }
    }

    #[test]
    fn scatter_view_compute_is_empty() {
        let ds = sample_dataset();
        let records: Vec<&sales_data::Record> = ds.records().iter().collect();
        let scatter = VIEWS.iter().find(|v| v.is_raw()).unwrap();
        assert!(scatter.compute(&records).is_empty());
    }
}
