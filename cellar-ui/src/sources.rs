//! Record sources for the browser: embedded payload first, then the network.

use crate::config::DATA_URL;
use crate::js_bridge;
use cellar_core::models::{parse_records, WineRecord};
use cellar_core::source::{EmbeddedSource, RecordSource};
use futures::future::{FutureExt, LocalBoxFuture};

/// JSON array fetched over HTTP.
pub struct RemoteSource {
    url: String,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl RecordSource for RemoteSource {
    fn name(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> LocalBoxFuture<'_, anyhow::Result<Vec<WineRecord>>> {
        async move {
            let text = js_bridge::fetch_text(&self.url).await?;
            parse_records(&text)
        }
        .boxed_local()
    }
}

/// The page's source order: the build-time payload, then [`DATA_URL`].
pub fn page_sources(embedded: &'static str) -> Vec<Box<dyn RecordSource>> {
    vec![
        Box::new(EmbeddedSource::new(embedded)),
        Box::new(RemoteSource::new(DATA_URL)),
    ]
}
