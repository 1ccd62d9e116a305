//! Filter options and the conjunctive filter selection.
//!
//! [`FilterOptions`] is computed once from the full dataset and feeds
//! the selector widgets; [`FilterSelection`] is what the user actually
//! picked. Applying a selection is a single conjunction of membership
//! tests plus an inclusive date-range bound.

use chrono::NaiveDate;
use sales_data::{Dataset, Record};
use std::collections::{BTreeSet, HashSet};

/// Distinct values per dimension, computed from the *full* table (never
/// the filtered one), in first-occurrence order. Years are sorted
/// ascending. Feeds the multi-select widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub sub_categories: Vec<String>,
    pub cities: Vec<String>,
    pub years: Vec<i32>,
    pub months: Vec<String>,
    /// (min, max) order date of the full dataset, if any date parsed.
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let records = dataset.records();
        let years: Vec<i32> = records
            .iter()
            .filter_map(|r| r.year)
            .collect::<BTreeSet<i32>>()
            .into_iter()
            .collect();
        let options = FilterOptions {
            categories: distinct_first(records.iter().map(|r| r.category.as_str())),
            sub_categories: distinct_first(records.iter().map(|r| r.sub_category.as_str())),
            cities: distinct_first(records.iter().map(|r| r.city.as_str())),
            years,
            months: distinct_first(records.iter().filter_map(|r| r.month.as_deref())),
            date_range: dataset.date_range(),
        };
        log::info!(
            "[Sales Debug] filter: options built ({} categories, {} cities, {} years)",
            options.categories.len(),
            options.cities.len(),
            options.years.len()
        );
        options
    }
}

/// Distinct values in order of first occurrence.
fn distinct_first<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for v in values {
        if seen.insert(v) {
            out.push(v.to_string());
        }
    }
    out
}

/// The user's current filter state: a set of allowed values per
/// categorical dimension plus an inclusive `[start, end]` date range.
///
/// An empty set for any dimension matches nothing (there is no implicit
/// "all" fallback), and an inverted range simply matches nothing; both
/// produce an empty filtered table rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub categories: BTreeSet<String>,
    pub sub_categories: BTreeSet<String>,
    pub cities: BTreeSet<String>,
    pub years: BTreeSet<i32>,
    pub months: BTreeSet<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FilterSelection {
    /// The default selection: every value of every dimension, with the
    /// date range clamped to the dataset's (min, max).
    pub fn all(options: &FilterOptions) -> Self {
        FilterSelection {
            categories: options.categories.iter().cloned().collect(),
            sub_categories: options.sub_categories.iter().cloned().collect(),
            cities: options.cities.iter().cloned().collect(),
            years: options.years.iter().copied().collect(),
            months: options.months.iter().cloned().collect(),
            start_date: options.date_range.map(|(min, _)| min),
            end_date: options.date_range.map(|(_, max)| max),
        }
    }

    /// Conjunction of all per-dimension predicates. Records with a null
    /// order date fail the date-range bound (a null date is outside any
    /// finite range) and fail the year/month membership tests.
    pub fn matches(&self, record: &Record) -> bool {
        self.categories.contains(&record.category)
            && self.sub_categories.contains(&record.sub_category)
            && self.cities.contains(&record.city)
            && record.year.is_some_and(|y| self.years.contains(&y))
            && record
                .month
                .as_ref()
                .is_some_and(|m| self.months.contains(m))
            && self.date_in_range(record.order_date)
    }

    fn date_in_range(&self, date: Option<NaiveDate>) -> bool {
        match (date, self.start_date, self.end_date) {
            (Some(d), Some(start), Some(end)) => start <= d && d <= end,
            _ => false,
        }
    }
}

/// The filtered table: every record satisfying all active predicates,
/// in dataset order. Recomputed from scratch on every filter change.
pub fn filter_records<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> Vec<&'a Record> {
    let filtered: Vec<&Record> = dataset
        .records()
        .iter()
        .filter(|r| selection.matches(r))
        .collect();
    log::info!(
        "[Sales Debug] filter: {} of {} records match",
        filtered.len(),
        dataset.len()
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_data::Dataset;

    fn sample_dataset() -> Dataset {
        let csv = "\
Order Date,Category,Sub Category,City,Region,Customer Name,Sales,Profit,Discount
2022-01-01,Cat A,Sub 1,City X,North,Amrish,100,20,0.1
2022-01-02,Cat A,Sub 2,City Y,South,Verma,50,5,0.2
2022-02-10,Cat B,Sub 1,City X,North,Sudha,200,40,0.0
bad-date,Cat B,Sub 2,City Y,South,Ravi,75,15,0.3
";
        Dataset::from_csv_str(csv).unwrap()
    }

    #[test]
    fn options_preserve_first_occurrence_order() {
        let ds = sample_dataset();
        let opts = FilterOptions::from_dataset(&ds);
        assert_eq!(opts.categories, vec!["Cat A", "Cat B"]);
        assert_eq!(opts.cities, vec!["City X", "City Y"]);
        assert_eq!(opts.months, vec!["January", "February"]);
        assert_eq!(opts.years, vec![2022]);
    }

    #[test]
    fn default_selection_matches_all_dated_records() {
        let ds = sample_dataset();
        let sel = FilterSelection::all(&FilterOptions::from_dataset(&ds));
        let filtered = filter_records(&ds, &sel);
        // The bad-date row fails the date-range bound.
        assert_eq!(filtered.len(), 3);
        for r in &filtered {
            assert!(sel.matches(r));
        }
    }

    #[test]
    fn default_range_is_clamped_to_dataset() {
        let ds = sample_dataset();
        let sel = FilterSelection::all(&FilterOptions::from_dataset(&ds));
        assert_eq!(sel.start_date, NaiveDate::from_ymd_opt(2022, 1, 1));
        assert_eq!(sel.end_date, NaiveDate::from_ymd_opt(2022, 2, 10));
    }

    #[test]
    fn city_filter_narrows_table() {
        let ds = sample_dataset();
        let opts = FilterOptions::from_dataset(&ds);
        let mut sel = FilterSelection::all(&opts);
        sel.cities = ["City X".to_string()].into_iter().collect();
        let filtered = filter_records(&ds, &sel);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.city == "City X"));
    }

    #[test]
    fn empty_dimension_selection_yields_empty_table() {
        let ds = sample_dataset();
        let opts = FilterOptions::from_dataset(&ds);
        let mut sel = FilterSelection::all(&opts);
        sel.categories.clear();
        assert!(filter_records(&ds, &sel).is_empty());
    }

    #[test]
    fn single_day_range() {
        let ds = sample_dataset();
        let opts = FilterOptions::from_dataset(&ds);
        let mut sel = FilterSelection::all(&opts);
        sel.start_date = NaiveDate::from_ymd_opt(2022, 1, 1);
        sel.end_date = NaiveDate::from_ymd_opt(2022, 1, 1);
        let filtered = filter_records(&ds, &sel);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].customer, "Amrish");
    }

    #[test]
    fn inverted_range_yields_empty_table() {
        let ds = sample_dataset();
        let opts = FilterOptions::from_dataset(&ds);
        let mut sel = FilterSelection::all(&opts);
        sel.start_date = NaiveDate::from_ymd_opt(2022, 2, 1);
        sel.end_date = NaiveDate::from_ymd_opt(2022, 1, 1);
        assert!(filter_records(&ds, &sel).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = sample_dataset();
        let opts = FilterOptions::from_dataset(&ds);
        let mut sel = FilterSelection::all(&opts);
        sel.months = ["January".to_string()].into_iter().collect();
        let a = filter_records(&ds, &sel);
        let b = filter_records(&ds, &sel);
        assert_eq!(a, b);
    }
}
