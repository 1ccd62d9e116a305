//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use sales_analytics::FilterOptions;
use sales_data::Dataset;
use std::collections::BTreeSet;

/// Shared application state for the sales dashboard.
///
/// The selection signals hold display strings (years included); the app
/// converts them into a typed `FilterSelection` on every recomputation.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until parsed)
    pub dataset: Signal<Option<Dataset>>,
    /// Distinct values per dimension, from the full dataset
    pub options: Signal<Option<FilterOptions>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if loading failed (fatal to the session)
    pub error_msg: Signal<Option<String>>,
    /// Multi-select state per categorical dimension
    pub selected_categories: Signal<BTreeSet<String>>,
    pub selected_sub_categories: Signal<BTreeSet<String>>,
    pub selected_cities: Signal<BTreeSet<String>>,
    pub selected_years: Signal<BTreeSet<String>>,
    pub selected_months: Signal<BTreeSet<String>>,
    /// Date range bounds as "YYYY-MM-DD" strings from the date inputs
    pub start_date: Signal<String>,
    pub end_date: Signal<String>,
    /// Index of the active view tab (0..9)
    pub active_tab: Signal<usize>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            options: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_categories: Signal::new(BTreeSet::new()),
            selected_sub_categories: Signal::new(BTreeSet::new()),
            selected_cities: Signal::new(BTreeSet::new()),
            selected_years: Signal::new(BTreeSet::new()),
            selected_months: Signal::new(BTreeSet::new()),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            active_tab: Signal::new(0),
        }
    }
}
