//! Filter-and-aggregate pipeline for the retail sales dashboard.
//!
//! The pipeline is pure and stateless: a [`FilterSelection`] applied to
//! the loaded dataset yields the filtered table, and each of the nine
//! [`views::VIEWS`] turns that table into insertion-ordered aggregate
//! rows plus a max/min extremal pair. Recomputation is idempotent and
//! owned entirely by the current rendering pass.

pub mod aggregate;
pub mod filter;
pub mod views;

pub use aggregate::{
    aggregate, extremes, record_extremes, scatter_points, AggregateRow, Dimension, Metric,
    ScatterPoint,
};
pub use filter::{filter_records, FilterOptions, FilterSelection};
pub use views::{ChartKind, ViewSpec, VIEWS};
