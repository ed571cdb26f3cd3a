//! Tests for core data types

#[cfg(test)]
mod tests {
    use super::super::types::*;

    #[test]
    fn test_signal_serialization() {
        assert_eq!(serde_json::to_string(&Signal::Buy).unwrap(), "\"buy\"");
        assert_eq!(serde_json::to_string(&Signal::Sell).unwrap(), "\"sell\"");
        assert_eq!(serde_json::to_string(&Signal::Hold).unwrap(), "\"hold\"");
        assert_eq!(serde_json::to_string(&Signal::Error).unwrap(), "\"error\"");
    }

    #[test]
    fn test_signal_deserialization() {
        let buy: Signal = serde_json::from_str("\"buy\"").unwrap();
        let sell: Signal = serde_json::from_str("\"sell\"").unwrap();
        let hold: Signal = serde_json::from_str("\"hold\"").unwrap();
        let error: Signal = serde_json::from_str("\"error\"").unwrap();

        assert_eq!(buy, Signal::Buy);
        assert_eq!(sell, Signal::Sell);
        assert_eq!(hold, Signal::Hold);
        assert_eq!(error, Signal::Error);
    }

    #[test]
    fn test_sentiment_serialization() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&Sentiment::Negative).unwrap(),
            "\"negative\""
        );
        assert_eq!(
            serde_json::to_string(&Sentiment::Neutral).unwrap(),
            "\"neutral\""
        );
    }

    #[test]
    fn test_sentiment_labels() {
        assert_eq!(Sentiment::Positive.as_str(), "positive");
        assert_eq!(Sentiment::Negative.as_str(), "negative");
        assert_eq!(Sentiment::Neutral.as_str(), "neutral");
    }

    #[test]
    fn test_error_decision_shape() {
        let decision = Decision::error("EUR/USD", "feed blew up");

        assert_eq!(decision.pair, "EUR/USD");
        assert_eq!(decision.signal, Signal::Error);
        assert_eq!(decision.confidence, 0.0);
        assert!(decision.sentiment.is_none());
        assert!(decision.reason.is_none());
        assert_eq!(decision.error.as_deref(), Some("feed blew up"));
    }

    #[test]
    fn test_decision_json_omits_empty_optionals() {
        let decision = Decision::error("EUR/USD", "boom");
        let json = serde_json::to_string(&decision).unwrap();

        assert!(json.contains("\"error\":\"boom\""));
        assert!(!json.contains("\"sentiment\""));
        assert!(!json.contains("\"reason\""));
    }

    #[test]
    fn test_news_item_roundtrip() {
        let item = NewsItem {
            title: "EUR climbs".to_string(),
            link: "http://example.com/1".to_string(),
            summary: "Euro higher after data".to_string(),
            published_at: "Mon, 01 Jan 2024 10:00:00 GMT".to_string(),
        };

        let json = serde_json::to_string(&item).unwrap();
        let back: NewsItem = serde_json::from_str(&json).unwrap();

        assert_eq!(back.title, item.title);
        assert_eq!(back.published_at, item.published_at);
    }
}
