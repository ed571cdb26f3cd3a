//! Error types for the signal bot

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BotError>;

/// Bot-wide error type
#[derive(Debug, Error)]
pub enum BotError {
    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed could not be retrieved or understood
    #[error("Feed error: {0}")]
    Feed(String),

    /// Configuration loading or validation failure
    #[error("Config error: {0}")]
    Config(String),
}
