//! News feed ingestion
//!
//! Pulls raw entries from a remote RSS feed. Transport, status, and parse
//! failures all degrade to an empty batch so a dead feed stalls a decision
//! at "hold" instead of killing the run.

mod rss_reader;


pub use rss_reader::RssFeedReader;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::NewsItem;

/// A source of news entries for the pipeline
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Source name for logging
    fn name(&self) -> &str;

    /// Fetch the current batch of entries. `query` describes what the caller
    /// is after; sources with a fixed catalog may ignore it.
    async fn fetch(&self, query: &str) -> Result<Vec<NewsItem>>;
}
