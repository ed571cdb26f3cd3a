//! RSS 2.0 feed reader

use async_trait::async_trait;
use std::time::Duration;

use super::NewsSource;
use crate::config::FeedConfig;
use crate::error::Result;
use crate::types::NewsItem;

/// Reads a fixed RSS feed over HTTP.
///
/// One bounded-timeout attempt per fetch, no retries. Once constructed, every
/// fetch failure mode returns an empty batch; the caller never sees an error
/// from this source.
pub struct RssFeedReader {
    http: reqwest::Client,
    url: String,
}

impl RssFeedReader {
    /// Fails if the client cannot be built (e.g. an invalid user-agent
    /// value); the timeout bound must never be dropped silently.
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl NewsSource for RssFeedReader {
    fn name(&self) -> &str {
        "rss"
    }

    async fn fetch(&self, query: &str) -> Result<Vec<NewsItem>> {
        // The source URL is fixed; the query is a future extension point.
        tracing::debug!("Fetching {} (query: {})", self.url, query);

        let response = match self.http.get(&self.url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Feed request failed: {}", e);
                return Ok(Vec::new());
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Feed returned status {}", response.status());
            return Ok(Vec::new());
        }

        let body = match response.bytes().await {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!("Failed to read feed body: {}", e);
                return Ok(Vec::new());
            }
        };

        let channel = match rss::Channel::read_from(&body[..]) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Malformed feed body: {}", e);
                return Ok(Vec::new());
            }
        };

        let items = parse_items(&channel);
        tracing::debug!("Fetched {} items from {}", items.len(), channel.title());
        Ok(items)
    }
}

/// Map feed entries to [`NewsItem`]s.
///
/// Missing sub-elements fall back to placeholders; an entry that carries
/// neither a title nor a description has nothing to score and is dropped,
/// without aborting the rest of the batch.
fn parse_items(channel: &rss::Channel) -> Vec<NewsItem> {
    channel
        .items()
        .iter()
        .filter_map(|item| {
            if item.title().is_none() && item.description().is_none() {
                return None;
            }

            Some(NewsItem {
                title: item.title().unwrap_or("No title").to_string(),
                link: item.link().unwrap_or_default().to_string(),
                summary: item.description().unwrap_or_default().to_string(),
                published_at: item.pub_date().unwrap_or_default().to_string(),
            })
        })
        .collect()
}
