//! Wine inventory data layer shared by the cellar web apps.
//!
//! This crate owns everything that can be computed without a browser:
//! the [`WineRecord`](models::WineRecord) shape, the ordered record sources
//! and the init-once [`WineStore`], the filter vocabularies, the summary
//! figures, the per-field frequency tables and the JSON payloads handed to
//! the D3.js table and bar chart widgets.
//!
//! # Usage
//!
//! ```rust
//! use cellar_core::source::{EmbeddedSource, RecordSource};
//! use cellar_core::{aggregate, vocabulary, WineStore};
//!
//! let store = WineStore::new();
//! let sources: Vec<Box<dyn RecordSource>> = vec![Box::new(EmbeddedSource::new(
//!     r#"[{"pais":"France","estilo":"Red","safra":"2015"}]"#,
//! ))];
//! let records = futures::executor::block_on(store.load(&sources));
//!
//! let vocab = vocabulary::build_vocabulary(&records);
//! assert_eq!(vocab.countries, vec!["France"]);
//!
//! let styles = aggregate::aggregate_by(&records, aggregate::AggregateField::Style);
//! assert_eq!(styles.get("Red"), Some(1));
//! ```

pub mod aggregate;
pub mod filters;
mod loader;
pub mod models;
pub mod preference;
pub mod source;
pub mod summary;
pub mod views;
pub mod vocabulary;

use models::WineRecord;
use std::cell::RefCell;
use std::rc::Rc;

/// Session-wide wine record cache.
///
/// Cheaply cloneable (via `Rc`); every clone sees the same records. The
/// cache is written once by the first load that yields records and read
/// thereafter. See [`WineStore::load`].
#[derive(Clone, Default)]
pub struct WineStore {
    records: Rc<RefCell<Option<Rc<Vec<WineRecord>>>>>,
}

impl WineStore {
    /// Create an empty store. Nothing is loaded until [`WineStore::load`].
    pub fn new() -> Self {
        Self::default()
    }

    fn cached(&self) -> Option<Rc<Vec<WineRecord>>> {
        self.records.borrow().clone()
    }

    fn fill(&self, records: Rc<Vec<WineRecord>>) {
        if !records.is_empty() {
            *self.records.borrow_mut() = Some(records);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str) -> WineRecord {
        WineRecord {
            country: Some(country.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn store_starts_empty() {
        let store = WineStore::new();
        assert!(store.cached().is_none());
    }

    #[test]
    fn store_is_cloneable() {
        let store = WineStore::new();
        let other = store.clone();
        store.fill(Rc::new(vec![record("Chile")]));
        let cached = other.cached().expect("Clone should see the same cache via shared Rc");
        assert_eq!(cached.len(), 1);
    }

    #[test]
    fn empty_records_do_not_fill_cache() {
        let store = WineStore::new();
        store.fill(Rc::new(Vec::new()));
        assert!(store.cached().is_none());
    }
}
