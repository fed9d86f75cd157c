//! Tests for CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn parse_query_words() {
        let cli = Cli::parse_from_iter(["unbang", "!w", "rust", "lang"]);

        assert_eq!(cli.query, vec!["!w", "rust", "lang"]);
        assert_eq!(cli.query_text(), "!w rust lang");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_single_quoted_query() {
        let cli = Cli::parse_from_iter(["unbang", "!g hello   world"]);
        assert_eq!(cli.query_text(), "!g hello   world");
    }

    #[test]
    fn parse_no_query() {
        let cli = Cli::parse_from_iter(["unbang"]);

        assert!(cli.query.is_empty());
        assert_eq!(cli.query_text(), "");
    }

    #[test]
    fn parse_options() {
        let cli = Cli::parse_from_iter([
            "unbang",
            "--source",
            "https://example.com/bangs.json",
            "--default-bang",
            "ddg",
            "--cache-dir",
            "/tmp/unbang",
            "--ttl",
            "30",
            "-v",
            "paris",
        ]);

        assert_eq!(cli.source.as_deref(), Some("https://example.com/bangs.json"));
        assert_eq!(cli.default_bang.as_deref(), Some("ddg"));
        assert_eq!(cli.cache_dir, Some(PathBuf::from("/tmp/unbang")));
        assert_eq!(cli.ttl, Some(30));
        assert!(cli.verbose);
        assert_eq!(cli.query_text(), "paris");
    }

    #[test]
    fn parse_link() {
        let cli = Cli::parse_from_iter([
            "unbang",
            "--link",
            "https://unbang.link/?q=x&config=/c.json",
        ]);

        assert_eq!(
            cli.link.as_deref(),
            Some("https://unbang.link/?q=x&config=/c.json")
        );
        assert!(cli.query.is_empty());
    }

    #[test]
    fn link_conflicts_with_query() {
        let result = Cli::try_parse_from(["unbang", "--link", "https://x/", "paris"]);
        assert!(result.is_err());
    }

    #[test]
    fn hyphenated_query_words_are_query_text() {
        let cli = Cli::parse_from_iter(["unbang", "!g", "-rust", "--lang"]);

        assert_eq!(cli.query_text(), "!g -rust --lang");
    }

    #[test]
    fn options_after_first_query_word_are_query_text() {
        let cli = Cli::parse_from_iter(["unbang", "-v", "paris", "-v"]);

        assert!(cli.verbose);
        assert_eq!(cli.query_text(), "paris -v");
    }

    #[test]
    fn double_dash_allows_hyphenated_queries() {
        let cli = Cli::parse_from_iter(["unbang", "--", "!g", "-v"]);

        assert_eq!(cli.query_text(), "!g -v");
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from_iter(["unbang", "-c", "unbang.toml", "x"]);
        assert_eq!(cli.config, Some(PathBuf::from("unbang.toml")));
    }
}

mod init_command {
    use super::*;

    #[test]
    fn init_uses_default_output() {
        let cli = Cli::parse_from_iter(["unbang", "init"]);

        match cli.command {
            Some(Command::Init { output }) => assert_eq!(output, PathBuf::from("unbang.toml")),
            other => panic!("Expected Init, got {other:?}"),
        }
    }

    #[test]
    fn init_accepts_output_path() {
        let cli = Cli::parse_from_iter(["unbang", "init", "-o", "/tmp/custom.toml"]);

        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, PathBuf::from("/tmp/custom.toml"));
            }
            other => panic!("Expected Init, got {other:?}"),
        }
    }

    #[test]
    fn global_options_work_after_subcommand() {
        let cli = Cli::parse_from_iter(["unbang", "init", "--verbose"]);
        assert!(cli.verbose);
    }
}
