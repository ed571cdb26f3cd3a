//! Configuration loading
//!
//! Settings come from an optional TOML file plus `FXBOT_`-prefixed
//! environment variables; every field has a default so the bot runs with no
//! config at all.

use serde::Deserialize;

use crate::error::{BotError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub watch: WatchConfig,
}

/// News feed source settings
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_feed_url")]
    pub url: String,
    /// Whole-request timeout for one fetch attempt
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Pairs the `run` command iterates over
#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_pairs")]
    pub pairs: Vec<String>,
}

fn default_feed_url() -> String {
    "https://www.fxstreet.com/rss/news".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0.0.0 Safari/537.36"
        .to_string()
}

fn default_pairs() -> Vec<String> {
    vec![
        "EUR/USD".to_string(),
        "GBP/USD".to_string(),
        "USD/JPY".to_string(),
    ]
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            pairs: default_pairs(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("FXBOT").separator("__"))
            .build()
            .map_err(|e| BotError::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| BotError::Config(e.to_string()))
    }
}
