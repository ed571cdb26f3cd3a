//! Pair relevance filtering
//!
//! Narrows a raw news batch to the items that mention the requested pair or
//! one of its legs.


use crate::types::NewsItem;

/// Keyword variants derived from a pair identifier.
///
/// The full pair string in upper and lower case, plus the base and quote legs
/// in both cases when the pair has exactly one `/`. Matching is case-sensitive
/// per keyword; enumerating both case variants is what makes the overall
/// lookup effectively case-insensitive.
pub fn pair_keywords(pair: &str) -> Vec<String> {
    let mut keywords = vec![pair.to_uppercase(), pair.to_lowercase()];

    let parts: Vec<&str> = pair.split('/').collect();
    if parts.len() == 2 {
        for leg in parts {
            keywords.push(leg.to_uppercase());
            keywords.push(leg.to_lowercase());
        }
    }

    keywords
}

/// Keep the items whose title or summary contains any pair keyword.
///
/// Order-preserving; scanning stops at the first matching keyword per item.
/// An empty result is a normal outcome, not an error.
pub fn filter_relevant(items: Vec<NewsItem>, pair: &str) -> Vec<NewsItem> {
    let keywords = pair_keywords(pair);

    items
        .into_iter()
        .filter(|item| {
            keywords
                .iter()
                .any(|k| item.title.contains(k.as_str()) || item.summary.contains(k.as_str()))
        })
        .collect()
}
