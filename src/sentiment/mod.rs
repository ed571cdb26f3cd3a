//! Keyword sentiment scoring
//!
//! Scores a news batch against fixed bullish/bearish lexicons. Deliberately
//! crude: no NLP, no weighting, plain substring presence over the combined
//! text.


use crate::types::{NewsItem, Sentiment};

/// Words that read bullish in finance headlines
pub const BULLISH: &[&str] = &[
    "bullish",
    "strong",
    "growth",
    "gain",
    "rise",
    "up",
    "positive",
    "buy",
    "strengthen",
    "recovery",
    "optimistic",
    "outlook",
    "boost",
    "rally",
    "exceed",
    "beat",
    "outperform",
    "higher",
    "surge",
    "increase",
];

/// Words that read bearish in finance headlines
pub const BEARISH: &[&str] = &[
    "bearish",
    "weak",
    "fall",
    "drop",
    "down",
    "negative",
    "sell",
    "weaken",
    "decline",
    "loss",
    "pessimistic",
    "concern",
    "worry",
    "risk",
    "plunge",
    "downturn",
    "lower",
    "decrease",
    "slump",
    "recession",
    "crisis",
];

/// Score a batch of items.
///
/// Counts how many *distinct* lexicon words occur anywhere in the lowercased
/// title+summary text. Matching is substring-based, not token-aware, so
/// "downturn" also satisfies "down"; that false-positive behavior is part of
/// the contract. Ties, including zero/zero, come out neutral.
pub fn score(items: &[NewsItem]) -> Sentiment {
    if items.is_empty() {
        return Sentiment::Neutral;
    }

    let blob = items
        .iter()
        .map(|i| format!("{} {}", i.title, i.summary))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let positive = BULLISH.iter().filter(|w| blob.contains(**w)).count();
    let negative = BEARISH.iter().filter(|w| blob.contains(**w)).count();

    tracing::debug!(
        "Scored {} items: {} bullish vs {} bearish words",
        items.len(),
        positive,
        negative
    );

    if positive > negative && positive > 0 {
        Sentiment::Positive
    } else if negative > positive && negative > 0 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
