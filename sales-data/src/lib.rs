//! Record model and CSV loading for the retail sales dashboard.
//!
//! This crate owns the immutable side of the pipeline: parsing the
//! Supermart sales CSV into typed [`Record`]s, deriving the calendar
//! fields (year, month name, day, year-month) once at load time, and
//! holding the result in a [`Dataset`] that is never mutated afterwards.
//!
//! Consumers (the analytics crate and the dashboard app) only ever see
//! `&[Record]`; all filtering and aggregation happens downstream.

pub mod dataset;
pub mod error;
pub mod record;

pub use dataset::{load_cached, Dataset};
pub use error::{DataLoadError, Result};
pub use record::{parse_order_date, Record};
