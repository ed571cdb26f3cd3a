//! Core data types shared across the pipeline

use chrono::Local;
use serde::{Deserialize, Serialize};

/// One raw news entry as pulled from the feed.
///
/// `published_at` is the source's timestamp string, kept verbatim; nothing
/// downstream parses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub published_at: String,
}

/// Coarse tone of the news flow for a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// Discrete recommended action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
    Error,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "buy",
            Signal::Sell => "sell",
            Signal::Hold => "hold",
            Signal::Error => "error",
        }
    }
}

/// Final output of one pipeline run. Exactly one of these is produced per
/// `run` call, whether or not any news was found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub pair: String,
    pub signal: Signal,
    /// Confidence in the signal, 0.0..=1.0
    pub confidence: f64,
    /// Wall-clock time of day (HH:MM) when the decision was made
    pub action_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Decision {
    /// Error decision carrying the failure description. Synthesized only at
    /// the agent boundary.
    pub fn error(pair: &str, message: impl Into<String>) -> Self {
        Self {
            pair: pair.to_string(),
            signal: Signal::Error,
            confidence: 0.0,
            action_time: Local::now().format("%H:%M").to_string(),
            sentiment: None,
            reason: None,
            error: Some(message.into()),
        }
    }
}
