//! Ordered source resolution for the session record cache.

use crate::models::WineRecord;
use crate::source::RecordSource;
use crate::WineStore;
use std::rc::Rc;

impl WineStore {
    /// Load the wine records, at most once per session.
    ///
    /// Returns the cached records if a previous load produced any. Otherwise
    /// each source is tried in order and the first one that succeeds wins;
    /// its records are cached when non-empty. When every source fails the
    /// result is empty. Failures are logged, never returned.
    pub async fn load(&self, sources: &[Box<dyn RecordSource>]) -> Rc<Vec<WineRecord>> {
        if let Some(cached) = self.cached() {
            log::info!("[Cellar] loader: Using {} cached records", cached.len());
            return cached;
        }

        for source in sources {
            match source.fetch().await {
                Ok(records) => {
                    log::info!(
                        "[Cellar] loader: Loaded {} records from {}",
                        records.len(),
                        source.name()
                    );
                    let records = Rc::new(records);
                    self.fill(records.clone());
                    return records;
                }
                Err(e) => {
                    log::warn!("[Cellar] loader: {} failed: {}", source.name(), e);
                }
            }
        }

        log::error!("[Cellar] loader: No source produced wine records");
        Rc::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EmbeddedSource;
    use anyhow::anyhow;
    use futures::executor::block_on;
    use futures::future::{FutureExt, LocalBoxFuture};
    use std::cell::Cell;

    /// Source that counts how often it is asked and replays a fixed outcome.
    struct Scripted {
        calls: Rc<Cell<u32>>,
        payload: Option<&'static str>,
    }

    impl Scripted {
        fn new(payload: Option<&'static str>) -> (Self, Rc<Cell<u32>>) {
            let calls = Rc::new(Cell::new(0));
            (
                Self {
                    calls: calls.clone(),
                    payload,
                },
                calls,
            )
        }
    }

    impl RecordSource for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn fetch(&self) -> LocalBoxFuture<'_, anyhow::Result<Vec<WineRecord>>> {
            self.calls.set(self.calls.get() + 1);
            let result = match self.payload {
                Some(json) => crate::models::parse_records(json),
                None => Err(anyhow!("HTTP 404")),
            };
            async move { result }.boxed_local()
        }
    }

    #[test]
    fn embedded_payload_wins() {
        let (remote, remote_calls) = Scripted::new(Some(r#"[{"pais":"Chile"}]"#));
        let sources: Vec<Box<dyn RecordSource>> = vec![
            Box::new(EmbeddedSource::new(r#"[{"pais":"France"}]"#)),
            Box::new(remote),
        ];
        let store = WineStore::new();
        let records = block_on(store.load(&sources));
        assert_eq!(records[0].country(), Some("France"));
        assert_eq!(remote_calls.get(), 0, "Network source should not be tried");
    }

    #[test]
    fn falls_through_to_network_on_parse_failure() {
        let (remote, remote_calls) = Scripted::new(Some(r#"[{"pais":"Chile"}]"#));
        let sources: Vec<Box<dyn RecordSource>> = vec![
            Box::new(EmbeddedSource::new("[{broken")),
            Box::new(remote),
        ];
        let store = WineStore::new();
        let records = block_on(store.load(&sources));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country(), Some("Chile"));
        assert_eq!(remote_calls.get(), 1);
    }

    #[test]
    fn all_sources_failing_yields_empty() {
        let (remote, _) = Scripted::new(None);
        let sources: Vec<Box<dyn RecordSource>> =
            vec![Box::new(EmbeddedSource::new("")), Box::new(remote)];
        let store = WineStore::new();
        let records = block_on(store.load(&sources));
        assert!(records.is_empty());
        assert!(store.cached().is_none());
    }

    #[test]
    fn second_load_uses_cache() {
        let (remote, remote_calls) = Scripted::new(Some(r#"[{"pais":"Chile"},{"pais":"Peru"}]"#));
        let sources: Vec<Box<dyn RecordSource>> = vec![Box::new(remote)];
        let store = WineStore::new();

        let first = block_on(store.load(&sources));
        let second = block_on(store.load(&sources));
        assert_eq!(remote_calls.get(), 1, "Cached records should not be re-fetched");
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(store.cached().map(|r| r.len()), Some(2));
    }

    #[test]
    fn empty_result_is_retried_next_time() {
        let (remote, remote_calls) = Scripted::new(Some("[]"));
        let sources: Vec<Box<dyn RecordSource>> = vec![Box::new(remote)];
        let store = WineStore::new();

        assert!(block_on(store.load(&sources)).is_empty());
        assert!(block_on(store.load(&sources)).is_empty());
        assert_eq!(remote_calls.get(), 2);
    }
}
