//! Tests for bang list validation.

use serde_json::json;

use super::{BangEntry, FormatError, from_value, parse_config};

mod parsing {
    use super::*;

    #[test]
    fn parses_array_of_entries() {
        let body = br#"[
            {"t": "g", "u": "https://www.google.com/search?q={{{s}}}"},
            {"t": "w", "u": "https://en.wikipedia.org/wiki/{{{s}}}"}
        ]"#;

        let config = parse_config(body).unwrap();

        assert_eq!(config.len(), 2);
        assert_eq!(
            config.entries()[1],
            BangEntry::new("w", "https://en.wikipedia.org/wiki/{{{s}}}")
        );
    }

    #[test]
    fn ignores_extra_fields() {
        let body = br#"[{"c": "Tech", "d": "github.com", "r": 42, "s": "GitHub",
                        "sc": "Programming", "t": "gh",
                        "u": "https://github.com/search?q={{{s}}}"}]"#;

        let config = parse_config(body).unwrap();

        assert_eq!(config.find("gh").unwrap().url_template, "https://github.com/search?q={{{s}}}");
    }

    #[test]
    fn empty_array_is_valid() {
        let config = parse_config(b"[]").unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn rejects_invalid_json() {
        let result = parse_config(b"<html>not json</html>");
        assert!(matches!(result, Err(FormatError::InvalidJson(_))));
    }

    #[test]
    fn rejects_object_payload() {
        let result = parse_config(br#"{"bangs": []}"#);

        match result {
            Err(FormatError::NotAnArray { found }) => assert_eq!(found, "an object"),
            other => panic!("Expected NotAnArray, got {other:?}"),
        }
    }
}

mod value_validation {
    use super::*;

    #[test]
    fn rejects_null() {
        let result = from_value(json!(null));
        assert!(matches!(result, Err(FormatError::NotAnArray { found: "null" })));
    }

    #[test]
    fn rejects_entry_missing_template() {
        let result = from_value(json!([{"t": "g", "u": "x"}, {"t": "w"}]));

        match result {
            Err(FormatError::InvalidEntry { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("`u`"), "reason should name the field: {reason}");
            }
            other => panic!("Expected InvalidEntry, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_object_entry() {
        let result = from_value(json!(["g"]));
        assert!(matches!(result, Err(FormatError::InvalidEntry { index: 0, .. })));
    }

    #[test]
    fn rejects_non_string_trigger() {
        let result = from_value(json!([{"t": 7, "u": "x"}]));
        assert!(matches!(result, Err(FormatError::InvalidEntry { index: 0, .. })));
    }

    #[test]
    fn error_message_includes_index() {
        let err = from_value(json!([{}])).unwrap_err();
        assert!(err.to_string().starts_with("Invalid bang at index 0"));
    }
}
