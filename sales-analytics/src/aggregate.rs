//! Parameterized grouping, summation, and extremal lookup.
//!
//! One `aggregate` function covers all grouped views; the scatter view
//! works on raw records via [`scatter_points`] and [`record_extremes`].

use sales_data::Record;
use serde::Serialize;
use std::collections::HashMap;

/// A grouping dimension. Extracts the display key for a record, or
/// `None` when the record cannot name a group (null-date rows under the
/// date-derived dimensions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    OrderDate,
    Category,
    SubCategory,
    City,
    Region,
    Customer,
    Month,
    Year,
}

impl Dimension {
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::OrderDate => "Order Date",
            Dimension::Category => "Category",
            Dimension::SubCategory => "Sub Category",
            Dimension::City => "City",
            Dimension::Region => "Region",
            Dimension::Customer => "Customer Name",
            Dimension::Month => "Month",
            Dimension::Year => "Year",
        }
    }

    pub fn key_of(&self, record: &Record) -> Option<String> {
        match self {
            Dimension::OrderDate => record.order_date.map(|d| d.format("%Y-%m-%d").to_string()),
            Dimension::Category => Some(record.category.clone()),
            Dimension::SubCategory => Some(record.sub_category.clone()),
            Dimension::City => Some(record.city.clone()),
            Dimension::Region => Some(record.region.clone()),
            Dimension::Customer => Some(record.customer.clone()),
            Dimension::Month => record.month.clone(),
            Dimension::Year => record.year.map(|y| y.to_string()),
        }
    }
}

/// The summed column of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Sales,
    Profit,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Sales => "Sales",
            Metric::Profit => "Profit",
        }
    }

    pub fn value_of(&self, record: &Record) -> f64 {
        match self {
            Metric::Sales => record.sales,
            Metric::Profit => record.profit,
        }
    }
}

/// One (group key, summed metric) pair. `keys` holds one entry per
/// grouping dimension, in the order the view declares them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub keys: Vec<String>,
    pub value: f64,
}

impl AggregateRow {
    /// Composite key for display and chart axes.
    pub fn key_label(&self) -> String {
        self.keys.join(" / ")
    }
}

/// One point of the sales-vs-discount scatter view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub discount: f64,
    pub sales: f64,
    pub category: String,
}

/// Group `records` by the composite key of `group_by` and sum `metric`
/// per group. Groups appear in first-occurrence order of the input, and
/// groups absent from the input do not appear at all (no zero-filling).
/// Records that cannot produce a key for every grouping dimension are
/// skipped.
pub fn aggregate(records: &[&Record], group_by: &[Dimension], metric: Metric) -> Vec<AggregateRow> {
    let mut index: HashMap<Vec<String>, usize> = HashMap::new();
    let mut rows: Vec<AggregateRow> = Vec::new();

    for record in records {
        let keys: Option<Vec<String>> = group_by.iter().map(|d| d.key_of(record)).collect();
        let Some(keys) = keys else { continue };
        let value = metric.value_of(record);
        match index.get(&keys) {
            Some(&i) => rows[i].value += value,
            None => {
                index.insert(keys.clone(), rows.len());
                rows.push(AggregateRow { keys, value });
            }
        }
    }
    log::info!(
        "[Sales Debug] aggregate: {} records -> {} groups ({})",
        records.len(),
        rows.len(),
        metric.label()
    );
    rows
}

/// The single maximum and single minimum aggregate row by value. Ties
/// go to the earlier row. `None` on empty input: an empty view reports
/// "no data" instead of failing.
pub fn extremes(rows: &[AggregateRow]) -> Option<(&AggregateRow, &AggregateRow)> {
    let first = rows.first()?;
    let mut max = first;
    let mut min = first;
    for row in &rows[1..] {
        if row.value > max.value {
            max = row;
        }
        if row.value < min.value {
            min = row;
        }
    }
    Some((max, min))
}

/// Extremal lookup over raw records, for the scatter view. Same
/// first-occurrence tie-breaking as [`extremes`].
pub fn record_extremes<'a>(
    records: &[&'a Record],
    metric: Metric,
) -> Option<(&'a Record, &'a Record)> {
    let mut iter = records.iter();
    let first = *iter.next()?;
    let mut max = first;
    let mut min = first;
    for &record in iter {
        if metric.value_of(record) > metric.value_of(max) {
            max = record;
        }
        if metric.value_of(record) < metric.value_of(min) {
            min = record;
        }
    }
    Some((max, min))
}

/// (discount, sales, category) triples for the scatter chart payload.
pub fn scatter_points(records: &[&Record]) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|r| ScatterPoint {
            discount: r.discount,
            sales: r.sales,
            category: r.category.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_data::Dataset;

    fn sample_dataset() -> Dataset {
        let csv = "\
Order Date,Category,Sub Category,City,Region,Customer Name,Sales,Profit,Discount
2022-01-01,Cat A,Sub 1,City X,North,Amrish,100,20,0.10
2022-01-02,Cat A,Sub 2,City Y,South,Verma,50,5,0.20
2022-02-10,Cat B,Sub 1,City X,North,Sudha,200,40,0.00
2022-02-11,Cat A,Sub 1,City X,North,Amrish,25,-5,0.30
";
        Dataset::from_csv_str(csv).unwrap()
    }

    fn all_records(ds: &Dataset) -> Vec<&Record> {
        ds.records().iter().collect()
    }

    #[test]
    fn aggregate_by_city_sums_and_preserves_order() {
        let ds = sample_dataset();
        let rows = aggregate(&all_records(&ds), &[Dimension::City], Metric::Sales);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].keys, vec!["City X"]);
        assert!((rows[0].value - 325.0).abs() < 1e-9);
        assert_eq!(rows[1].keys, vec!["City Y"]);
        assert!((rows[1].value - 50.0).abs() < 1e-9);
    }

    #[test]
    fn aggregate_composite_key() {
        let ds = sample_dataset();
        let rows = aggregate(
            &all_records(&ds),
            &[Dimension::Customer, Dimension::Year, Dimension::Category],
            Metric::Sales,
        );
        // Amrish appears once as a group (same customer/year/category twice).
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].keys, vec!["Amrish", "2022", "Cat A"]);
        assert!((rows[0].value - 125.0).abs() < 1e-9);
        assert_eq!(rows[0].key_label(), "Amrish / 2022 / Cat A");
    }

    #[test]
    fn aggregate_conserves_metric_total() {
        let ds = sample_dataset();
        let records = all_records(&ds);
        let table_total: f64 = records.iter().map(|r| r.sales).sum();
        for dims in [
            &[Dimension::OrderDate][..],
            &[Dimension::Category][..],
            &[Dimension::City][..],
            &[Dimension::Month][..],
        ] {
            let rows = aggregate(&records, dims, Metric::Sales);
            let agg_total: f64 = rows.iter().map(|r| r.value).sum();
            assert!(
                (agg_total - table_total).abs() < 1e-9,
                "Conservation violated for {dims:?}"
            );
        }
    }

    #[test]
    fn aggregate_skips_records_without_a_key() {
        let csv = "\
Order Date,Category,Sub Category,City,Region,Customer Name,Sales,Profit,Discount
2022-01-01,Cat A,Sub 1,City X,North,Amrish,100,20,0.1
oops,Cat A,Sub 1,City X,North,Amrish,60,10,0.1
";
        let ds = Dataset::from_csv_str(csv).unwrap();
        let records = all_records(&ds);
        // Date-keyed grouping drops the null-date row...
        let by_date = aggregate(&records, &[Dimension::OrderDate], Metric::Sales);
        assert_eq!(by_date.len(), 1);
        assert!((by_date[0].value - 100.0).abs() < 1e-9);
        // ...but category grouping still counts it.
        let by_cat = aggregate(&records, &[Dimension::Category], Metric::Sales);
        assert_eq!(by_cat.len(), 1);
        assert!((by_cat[0].value - 160.0).abs() < 1e-9);
    }

    #[test]
    fn aggregate_empty_input() {
        let rows = aggregate(&[], &[Dimension::City], Metric::Sales);
        assert!(rows.is_empty());
        assert!(extremes(&rows).is_none());
    }

    #[test]
    fn extremes_max_and_min() {
        let ds = sample_dataset();
        let rows = aggregate(&all_records(&ds), &[Dimension::OrderDate], Metric::Sales);
        let (max, min) = extremes(&rows).unwrap();
        assert_eq!(max.keys, vec!["2022-02-10"]);
        assert_eq!(min.keys, vec!["2022-02-11"]);
        for row in &rows {
            assert!(max.value >= row.value);
            assert!(min.value <= row.value);
        }
    }

    #[test]
    fn extremes_tie_goes_to_first_occurrence() {
        let rows = vec![
            AggregateRow {
                keys: vec!["a".into()],
                value: 10.0,
            },
            AggregateRow {
                keys: vec!["b".into()],
                value: 10.0,
            },
        ];
        let (max, min) = extremes(&rows).unwrap();
        assert_eq!(max.keys, vec!["a"]);
        assert_eq!(min.keys, vec!["a"]);
    }

    #[test]
    fn single_row_is_both_max_and_min() {
        let rows = vec![AggregateRow {
            keys: vec!["City X".into()],
            value: 100.0,
        }];
        let (max, min) = extremes(&rows).unwrap();
        assert_eq!(max, min);
        assert!((max.value - 100.0).abs() < 1e-9);
    }

    #[test]
    fn record_extremes_by_sales() {
        let ds = sample_dataset();
        let records = all_records(&ds);
        let (max, min) = record_extremes(&records, Metric::Sales).unwrap();
        assert_eq!(max.customer, "Sudha");
        assert!((min.sales - 25.0).abs() < 1e-9);
        assert!(record_extremes(&[], Metric::Sales).is_none());
    }

    #[test]
    fn scatter_points_carry_discount_and_category() {
        let ds = sample_dataset();
        let points = scatter_points(&all_records(&ds));
        assert_eq!(points.len(), 4);
        assert!((points[0].discount - 0.10).abs() < 1e-9);
        assert_eq!(points[2].category, "Cat B");
    }
}
