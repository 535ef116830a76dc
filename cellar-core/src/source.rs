//! Record sources tried in order by [`WineStore::load`](crate::WineStore::load).

use crate::models::{parse_records, WineRecord};
use anyhow::bail;
use futures::future::{FutureExt, LocalBoxFuture};
use std::borrow::Cow;

/// A place wine records can be read from.
///
/// Implementations return an error for every failure; the store decides
/// whether to fall through to the next source.
pub trait RecordSource {
    /// Short name used in log lines.
    fn name(&self) -> &str;

    fn fetch(&self) -> LocalBoxFuture<'_, anyhow::Result<Vec<WineRecord>>>;
}

/// JSON payload embedded in the page bundle at build time.
pub struct EmbeddedSource {
    text: Cow<'static, str>,
}

impl EmbeddedSource {
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self { text: text.into() }
    }
}

impl RecordSource for EmbeddedSource {
    fn name(&self) -> &str {
        "embedded payload"
    }

    fn fetch(&self) -> LocalBoxFuture<'_, anyhow::Result<Vec<WineRecord>>> {
        async move {
            if self.text.trim().is_empty() {
                bail!("no embedded payload");
            }
            parse_records(&self.text)
        }
        .boxed_local()
    }
}
