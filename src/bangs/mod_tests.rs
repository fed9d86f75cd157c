//! Tests for bang data types.

use super::*;

fn sample() -> BangsConfig {
    BangsConfig::new(vec![
        BangEntry::new("g", "https://www.google.com/search?q={{{s}}}"),
        BangEntry::new("W", "https://en.wikipedia.org/wiki/{{{s}}}"),
        BangEntry::new("g", "https://duplicate.example/?q={{{s}}}"),
    ])
}

mod bang_entry {
    use super::*;

    #[test]
    fn matches_exact_trigger() {
        let entry = BangEntry::new("gh", "https://github.com/search?q={{{s}}}");
        assert!(entry.matches("gh"));
    }

    #[test]
    fn matches_ignoring_case() {
        let entry = BangEntry::new("GH", "https://github.com/search?q={{{s}}}");
        assert!(entry.matches("gh"));
        assert!(entry.matches("Gh"));
    }

    #[test]
    fn does_not_match_prefix() {
        let entry = BangEntry::new("gh", "https://github.com/search?q={{{s}}}");
        assert!(!entry.matches("g"));
        assert!(!entry.matches("ghx"));
    }

    #[test]
    fn expand_replaces_placeholder() {
        let entry = BangEntry::new("g", "https://example.com/search?q={{{s}}}");
        assert_eq!(entry.expand("rust"), "https://example.com/search?q=rust");
    }

    #[test]
    fn expand_replaces_only_first_placeholder() {
        let entry = BangEntry::new("x", "https://example.com/{{{s}}}/{{{s}}}");
        assert_eq!(entry.expand("a"), "https://example.com/a/{{{s}}}");
    }

    #[test]
    fn expand_without_placeholder_returns_template() {
        let entry = BangEntry::new("home", "https://example.com/");
        assert_eq!(entry.expand("ignored"), "https://example.com/");
    }

    #[test]
    fn serializes_with_short_field_names() {
        let entry = BangEntry::new("g", "https://example.com/?q={{{s}}}");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "t": "g", "u": "https://example.com/?q={{{s}}}" })
        );
    }
}

mod bangs_config {
    use super::*;

    #[test]
    fn find_returns_first_match_on_duplicates() {
        let config = sample();
        let entry = config.find("g").unwrap();

        assert_eq!(entry.url_template, "https://www.google.com/search?q={{{s}}}");
    }

    #[test]
    fn find_is_case_insensitive() {
        let config = sample();
        assert_eq!(config.find("w").unwrap().trigger, "W");
    }

    #[test]
    fn find_folds_case_on_both_sides() {
        let config = BangsConfig::new(vec![BangEntry::new("GitHub", "https://github.com/search?q={{{s}}}")]);

        assert!(config.find("GITHUB").is_some());
        assert!(config.find("github").is_some());
        assert!(config.find("git").is_none());
        assert!(config.find("githubs").is_none());
    }

    #[test]
    fn find_folds_non_ascii_case() {
        let config = BangsConfig::new(vec![BangEntry::new("Ärzte", "https://example.com/?q={{{s}}}")]);

        assert!(config.find("äRZTE").is_some());
    }

    #[test]
    fn find_returns_none_for_unknown_trigger() {
        assert!(sample().find("zzz").is_none());
    }

    #[test]
    fn len_counts_duplicates() {
        let config = sample();
        assert_eq!(config.len(), 3);
        assert!(!config.is_empty());
    }

    #[test]
    fn default_is_empty() {
        let config = BangsConfig::default();
        assert!(config.is_empty());
        assert!(config.find("g").is_none());
    }

    #[test]
    fn serializes_as_plain_array() {
        let config = BangsConfig::new(vec![BangEntry::new("g", "u")]);
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json, serde_json::json!([{ "t": "g", "u": "u" }]));
    }

    #[test]
    fn collects_from_iterator_in_order() {
        let config: BangsConfig = ["a", "b"]
            .into_iter()
            .map(|t| BangEntry::new(t, "{{{s}}}"))
            .collect();

        let triggers: Vec<_> = config.entries().iter().map(|e| e.trigger.as_str()).collect();
        assert_eq!(triggers, vec!["a", "b"]);
    }
}
