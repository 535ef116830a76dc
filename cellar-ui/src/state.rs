//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::sources::page_sources;
use crate::storage;
use cellar_core::filters::TableFilters;
use cellar_core::models::WineRecord;
use cellar_core::views;
use cellar_core::vocabulary::{build_vocabulary, FilterVocabulary};
use cellar_core::WineStore;
use dioxus::prelude::*;
use std::rc::Rc;

/// Shared application state for all cellar pages.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Session record cache, loaded once
    pub store: Signal<WineStore>,
    /// Loaded records (empty until loaded, or if every source failed)
    pub records: Signal<Rc<Vec<WineRecord>>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Notice shown when loading ends without records
    pub error_msg: Signal<Option<String>>,
    /// Filter options derived from the records
    pub vocabulary: Signal<FilterVocabulary>,
    /// Active table predicates
    pub filters: Signal<TableFilters>,
    /// Current presentation mode
    pub dark_mode: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            store: Signal::new(WineStore::new()),
            records: Signal::new(Rc::new(Vec::new())),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            vocabulary: Signal::new(FilterVocabulary::default()),
            filters: Signal::new(TableFilters::new()),
            dark_mode: Signal::new(storage::preferences().is_dark_mode()),
        }
    }

    /// Load the records (embedded payload, then network) and derive the
    /// filter vocabulary. Ends with `loading == false` even when empty, in
    /// which case `error_msg` is set.
    pub async fn load(mut self, embedded: &'static str) {
        let store = self.store.peek().clone();
        let records = store.load(&page_sources(embedded)).await;
        self.error_msg.set(views::empty_notice(&records).map(String::from));
        self.vocabulary.set(build_vocabulary(&records));
        self.records.set(records);
        self.loading.set(false);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
