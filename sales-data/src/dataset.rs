//! The immutable in-memory dataset and its loaders.
//!
//! A [`Dataset`] is loaded once (from a file or an embedded CSV string)
//! and never mutated. The per-path cache in [`load_cached`] gives the
//! load-once-and-hold behavior the dashboard relies on: repeated calls
//! with the same path return the same `Arc` without touching the file
//! again.

use crate::error::{DataLoadError, Result};
use crate::record::{RawRow, Record};
use anyhow::Context;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Header columns the dataset file must carry.
const REQUIRED_COLUMNS: &[&str] = &[
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

/// The loaded sales table. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    date_range: Option<(NaiveDate, NaiveDate)>,
}

impl Dataset {
    /// Parse a header-bearing CSV string into a dataset.
    ///
    /// Rows with an unparseable "Order Date" are kept with a null date
    /// and null derived fields. A file with no data rows is an error.
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers()?.clone();
        for col in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == *col) {
                return Err(DataLoadError::MissingColumn(col.to_string()));
            }
        }

        let mut records = Vec::new();
        let mut null_dates = 0u32;
        for row in rdr.deserialize::<RawRow>() {
            let rec = Record::from(row?);
            if rec.order_date.is_none() {
                null_dates += 1;
            }
            records.push(rec);
        }
        if records.is_empty() {
            return Err(DataLoadError::Empty);
        }

        let date_range = date_range_of(&records);
        log::info!(
            "[Sales Debug] loader: Loaded {} records, {} with unparseable dates",
            records.len(),
            null_dates
        );
        Ok(Dataset {
            records,
            date_range,
        })
    }

    /// Read and parse a dataset file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let csv_data = std::fs::read_to_string(path.as_ref())?;
        Self::from_csv_str(&csv_data)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The (min, max) order date over records with a parseable date, or
    /// `None` when every date in the file failed to parse.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.date_range
    }
}

fn date_range_of(records: &[Record]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = records.iter().filter_map(|r| r.order_date);
    let first = dates.next()?;
    let (min, max) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
    Some((min, max))
}

static DATASET_CACHE: Lazy<Mutex<HashMap<PathBuf, Arc<Dataset>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Load a dataset file, memoized by path.
///
/// The first call reads and parses the file; later calls with the same
/// path return the cached `Arc` without re-reading. Load failures are
/// not cached, so a corrected file can be retried.
pub fn load_cached(path: impl AsRef<Path>) -> anyhow::Result<Arc<Dataset>> {
    let path = path.as_ref();
    let mut cache = DATASET_CACHE
        .lock()
        .expect("dataset cache mutex poisoned");
    if let Some(ds) = cache.get(path) {
        log::info!(
            "[Sales Debug] loader: cache hit for {} ({} records)",
            path.display(),
            ds.len()
        );
        return Ok(Arc::clone(ds));
    }
    let ds = Dataset::load(path)
        .with_context(|| format!("Failed to load sales dataset from {}", path.display()))
        .map(Arc::new)?;
    cache.insert(path.to_path_buf(), Arc::clone(&ds));
    Ok(ds)
}
