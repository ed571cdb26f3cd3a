//! Pipeline orchestration
//!
//! Threads fetch → filter → score → decide for one pair and owns the single
//! failure boundary: whatever a stage raises comes back to the caller as an
//! error decision, never as a propagated fault.


use crate::error::Result;
use crate::feed::NewsSource;
use crate::types::Decision;
use crate::{relevance, sentiment, strategy};

/// Runs the signal pipeline against a news source.
///
/// Holds no mutable state; concurrent `run` calls for different pairs are
/// independent.
pub struct TradeAgent<S> {
    source: S,
}

impl<S: NewsSource> TradeAgent<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Run the full pipeline for one pair. Always returns exactly one
    /// decision; stage failures surface as an `error` signal.
    pub async fn run(&self, pair: &str) -> Decision {
        match self.pipeline(pair).await {
            Ok(decision) => decision,
            Err(e) => {
                tracing::error!("Pipeline failed for {}: {}", pair, e);
                Decision::error(pair, e.to_string())
            }
        }
    }

    async fn pipeline(&self, pair: &str) -> Result<Decision> {
        let query = format!("latest news on {}", pair);
        let items = self.source.fetch(&query).await?;
        tracing::debug!("{} items from source {}", items.len(), self.source.name());

        let relevant = relevance::filter_relevant(items, pair);
        let sentiment = sentiment::score(&relevant);
        tracing::info!(
            "{}: {} relevant items, sentiment {}",
            pair,
            relevant.len(),
            sentiment.as_str()
        );

        Ok(strategy::decide(pair, sentiment))
    }
}
