//! A single sales transaction and its derived calendar fields.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Date formats accepted for the "Order Date" column. The Supermart
/// dataset mixes slash and dash separators, so each format is tried in
/// order until one parses.
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y", "%d-%m-%Y"];

/// Leniently parse an order date string. Returns `None` when no known
/// format matches; callers keep the row with a null date.
pub fn parse_order_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Raw CSV row as it appears in the dataset file. Field names map onto
/// the dataset's header row via serde renames.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRow {
    #[serde(rename = "Order Date")]
    pub order_date: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Sub Category")]
    pub sub_category: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Customer Name")]
    pub customer: String,
    #[serde(rename = "Sales")]
    pub sales: f64,
    #[serde(rename = "Profit")]
    pub profit: f64,
    #[serde(rename = "Discount")]
    pub discount: f64,
}

/// One sales transaction.
///
/// The calendar fields (`year`, `month`, `day`, `year_month`) are
/// derived from `order_date` exactly once at load time and are `None`
/// whenever the date itself failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub order_date: Option<NaiveDate>,
    pub category: String,
    pub sub_category: String,
    pub city: String,
    pub region: String,
    pub customer: String,
    pub sales: f64,
    pub profit: f64,
    pub discount: f64,
    pub year: Option<i32>,
    /// Full English month name ("January" .. "December").
    pub month: Option<String>,
    pub day: Option<u32>,
    /// "YYYY-MM" key for per-month time series.
    pub year_month: Option<String>,
}

impl From<RawRow> for Record {
    fn from(raw: RawRow) -> Self {
        let order_date = parse_order_date(&raw.order_date);
        Record {
            year: order_date.map(|d| d.year()),
            month: order_date.map(|d| d.format("%B").to_string()),
            day: order_date.map(|d| d.day()),
            year_month: order_date.map(|d| d.format("%Y-%m").to_string()),
            order_date,
            category: raw.category.trim().to_string(),
            sub_category: raw.sub_category.trim().to_string(),
            city: raw.city.trim().to_string(),
            region: raw.region.trim().to_string(),
            customer: raw.customer.trim().to_string(),
            sales: raw.sales,
            profit: raw.profit,
            discount: raw.discount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_order_date_iso() {
        let d = parse_order_date("2022-01-15").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2022, 1, 15).unwrap());
    }

    #[test]
    fn parse_order_date_us_slash() {
        let d = parse_order_date("11/8/2017").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2017, 11, 8).unwrap());
    }

    #[test]
    fn parse_order_date_dash() {
        let d = parse_order_date("06-12-2017").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2017, 6, 12).unwrap());
    }

    #[test]
    fn parse_order_date_garbage() {
        assert!(parse_order_date("not a date").is_none());
        assert!(parse_order_date("").is_none());
        assert!(parse_order_date("2022-13-40").is_none());
    }

    #[test]
    fn derived_fields_follow_date() {
        let raw = RawRow {
            order_date: "2022-03-05".to_string(),
            category: "Snacks".to_string(),
            sub_category: "Chips".to_string(),
            city: "Vellore".to_string(),
            region: "South".to_string(),
            customer: "Amrish".to_string(),
            sales: 500.0,
            profit: 120.0,
            discount: 0.12,
        };
        let rec = Record::from(raw);
        assert_eq!(rec.year, Some(2022));
        assert_eq!(rec.month.as_deref(), Some("March"));
        assert_eq!(rec.day, Some(5));
        assert_eq!(rec.year_month.as_deref(), Some("2022-03"));
    }

    #[test]
    fn derived_fields_null_on_bad_date() {
        let raw = RawRow {
            order_date: "???".to_string(),
            category: "Snacks".to_string(),
            sub_category: "Chips".to_string(),
            city: "Vellore".to_string(),
            region: "South".to_string(),
            customer: "Amrish".to_string(),
            sales: 500.0,
            profit: 120.0,
            discount: 0.12,
        };
        let rec = Record::from(raw);
        assert!(rec.order_date.is_none());
        assert!(rec.year.is_none());
        assert!(rec.month.is_none());
        assert!(rec.day.is_none());
        assert!(rec.year_month.is_none());
    }
}
