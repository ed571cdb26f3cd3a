//! Tests for configuration

#[cfg(test)]
mod tests {
    use super::super::config::*;

    #[test]
    fn test_feed_config_defaults() {
        let config: FeedConfig = toml::from_str("").unwrap();
        assert_eq!(config.url, "https://www.fxstreet.com/rss/news");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_watch_config_defaults() {
        let config: WatchConfig = toml::from_str("").unwrap();
        assert_eq!(config.pairs, vec!["EUR/USD", "GBP/USD", "USD/JPY"]);
    }

    #[test]
    fn test_full_config_from_toml() {
        let toml_str = r#"
[feed]
url = "http://localhost:8080/feed"
timeout_secs = 3

[watch]
pairs = ["AUD/USD"]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.feed.url, "http://localhost:8080/feed");
        assert_eq!(config.feed.timeout_secs, 3);
        // Unset fields keep their defaults
        assert!(config.feed.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.watch.pairs, vec!["AUD/USD"]);
    }

    #[test]
    fn test_empty_config_is_complete() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.feed.url.is_empty());
        assert!(config.feed.timeout_secs > 0);
        assert!(!config.watch.pairs.is_empty());
    }
}
