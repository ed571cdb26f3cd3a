//! Forex News Signal Bot
//!
//! A Rust-based decision-support stub that turns public forex headlines into
//! discrete trade signals. No order execution, no portfolio state.
//!
//! ## Architecture
//!
//! ```text
//! Feed (RSS) → Relevance Filter → Sentiment Scorer → Strategy (decide)
//!                                                          ↑
//!                                         Agent (orchestration, error boundary)
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod feed;
pub mod relevance;
pub mod sentiment;
pub mod strategy;
pub mod types;

#[cfg(test)]
mod types_tests;
#[cfg(test)]
mod config_tests;
