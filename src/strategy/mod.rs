//! Trade decision mapping
//!
//! Turns a sentiment reading into the final decision record. Pure apart from
//! reading the wall clock for the action time.


use chrono::Local;

use crate::types::{Decision, Sentiment, Signal};

/// Map a sentiment reading to a decision for the pair.
pub fn decide(pair: &str, sentiment: Sentiment) -> Decision {
    let (signal, confidence, reason) = match sentiment {
        Sentiment::Positive => (Signal::Buy, 0.75, "Positive news sentiment detected"),
        Sentiment::Negative => (Signal::Sell, 0.65, "Negative news sentiment detected"),
        Sentiment::Neutral => (Signal::Hold, 0.50, "Neutral or insufficient news sentiment"),
    };

    Decision {
        pair: pair.to_string(),
        signal,
        confidence,
        action_time: Local::now().format("%H:%M").to_string(),
        sentiment: Some(sentiment.as_str().to_string()),
        reason: Some(reason.to_string()),
        error: None,
    }
}
