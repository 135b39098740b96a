//! Tests for validated configuration.

use std::fs;
use std::time::Duration;

use tempfile::tempdir;

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, write_default_config};

/// Helper to create CLI args from a slice; the key never leaks in from the environment.
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["better-uptime"];
    full_args.extend(args);
    full_args.extend(["monitors", "get", "1"]);
    let mut cli = Cli::parse_from_iter(full_args);
    if !args.contains(&"--api-key") {
        cli.api_key = None;
    }
    cli
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod api_key {
    use super::*;

    #[test]
    fn missing_key_returns_error() {
        let result = ValidatedConfig::from_raw(&cli(&[]), None);

        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn blank_key_is_missing() {
        let result = ValidatedConfig::from_raw(&cli(&["--api-key", "  "]), None);

        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn key_from_cli() {
        let config = ValidatedConfig::from_raw(&cli(&["--api-key", "cli-key"]), None).unwrap();

        assert_eq!(config.api_key, "cli-key");
    }

    #[test]
    fn key_from_toml() {
        let toml = toml("[api]\nkey = \"file-key\"");
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert_eq!(config.api_key, "file-key");
    }

    #[test]
    fn cli_key_beats_toml() {
        let toml = toml("[api]\nkey = \"file-key\"");
        let config =
            ValidatedConfig::from_raw(&cli(&["--api-key", "cli-key"]), Some(&toml)).unwrap();

        assert_eq!(config.api_key, "cli-key");
    }
}

mod base_url {
    use super::*;

    #[test]
    fn defaults_to_public_api() {
        let config = ValidatedConfig::from_raw(&cli(&["--api-key", "k"]), None).unwrap();

        assert_eq!(
            config.base_url.as_str(),
            "https://uptime.betterstack.com/api/v2/"
        );
    }

    #[test]
    fn cli_beats_toml() {
        let toml = toml("[api]\nkey = \"k\"\nbase_url = \"https://file.example/api/\"");
        let config = ValidatedConfig::from_raw(
            &cli(&["--base-url", "https://cli.example/api/"]),
            Some(&toml),
        )
        .unwrap();

        assert_eq!(config.base_url.as_str(), "https://cli.example/api/");
    }

    #[test]
    fn toml_beats_default() {
        let toml = toml("[api]\nkey = \"k\"\nbase_url = \"https://file.example/api/\"");
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert_eq!(config.base_url.as_str(), "https://file.example/api/");
    }

    #[test]
    fn unparseable_url() {
        let result =
            ValidatedConfig::from_raw(&cli(&["--api-key", "k", "--base-url", "not a url"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn non_base_url() {
        let result = ValidatedConfig::from_raw(
            &cli(&["--api-key", "k", "--base-url", "mailto:ops@example.org"]),
            None,
        );

        match result {
            Err(ConfigError::InvalidBaseUrl { reason, .. }) => {
                assert_eq!(reason, "cannot be used as a base URL");
            }
            other => panic!("expected InvalidBaseUrl, got {other:?}"),
        }
    }
}

mod timeout {
    use super::*;

    #[test]
    fn default_timeout() {
        let config = ValidatedConfig::from_raw(&cli(&["--api-key", "k"]), None).unwrap();

        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn cli_beats_toml() {
        let toml = toml("[api]\nkey = \"k\"\ntimeout = 10");
        let config = ValidatedConfig::from_raw(&cli(&["--timeout", "5"]), Some(&toml)).unwrap();

        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn zero_timeout_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--api-key", "k", "--timeout", "0"]), None);

        assert!(matches!(result, Err(ConfigError::ZeroTimeout)));
    }
}

mod display {
    use super::*;

    #[test]
    fn key_is_redacted() {
        let config = ValidatedConfig::from_raw(&cli(&["--api-key", "top-secret"]), None).unwrap();

        let shown = config.to_string();
        let debugged = format!("{config:?}");

        assert!(!shown.contains("top-secret"));
        assert!(!debugged.contains("top-secret"));
        assert!(shown.contains("timeout: 30s"));
    }
}

mod loading {
    use super::*;

    #[test]
    fn explicit_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("uptime.toml");
        fs::write(&path, "[api]\nkey = \"file-key\"\ntimeout = 12").unwrap();

        let cli = cli(&["--config", path.to_str().unwrap()]);
        let config = ValidatedConfig::load_with_fallback(&cli, None).unwrap();

        assert_eq!(config.api_key, "file-key");
        assert_eq!(config.timeout, Duration::from_secs(12));
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let cli = cli(&["--api-key", "k", "--config", path.to_str().unwrap()]);
        let result = ValidatedConfig::load_with_fallback(&cli, None);

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn fallback_used_when_present() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api]\nkey = \"fallback-key\"").unwrap();

        let config = ValidatedConfig::load_with_fallback(&cli(&[]), Some(&path)).unwrap();

        assert_eq!(config.api_key, "fallback-key");
    }

    #[test]
    fn absent_fallback_is_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config =
            ValidatedConfig::load_with_fallback(&cli(&["--api-key", "k"]), Some(&path)).unwrap();

        assert_eq!(config.api_key, "k");
    }

    #[test]
    fn explicit_config_wins_over_fallback() {
        let dir = tempdir().unwrap();
        let explicit = dir.path().join("explicit.toml");
        let fallback = dir.path().join("fallback.toml");
        fs::write(&explicit, "[api]\nkey = \"explicit\"").unwrap();
        fs::write(&fallback, "[api]\nkey = \"fallback\"").unwrap();

        let cli = cli(&["--config", explicit.to_str().unwrap()]);
        let config = ValidatedConfig::load_with_fallback(&cli, Some(&fallback)).unwrap();

        assert_eq!(config.api_key, "explicit");
    }

    #[test]
    fn invalid_toml_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[api\nkey = ").unwrap();

        let cli = cli(&["--config", path.to_str().unwrap()]);
        let result = ValidatedConfig::load_with_fallback(&cli, None);

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod init {
    use super::*;

    #[test]
    fn writes_parseable_template() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("better-uptime.toml");

        write_default_config(&path).unwrap();

        let written = TomlConfig::load(&path).unwrap();
        assert!(written.api.key.is_none());
    }

    #[test]
    fn unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("config.toml");

        let result = write_default_config(&path);

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}

mod error_messages {
    use super::*;

    #[test]
    fn missing_key_names_every_source() {
        let message = ConfigError::MissingApiKey.to_string();

        assert!(message.contains("--api-key"));
        assert!(message.contains("BETTER_UPTIME_API_KEY"));
        assert!(message.contains("api.key"));
    }

    #[test]
    fn base_url_error_shows_input_and_reason() {
        let err = ValidatedConfig::from_raw(
            &cli(&["--api-key", "k", "--base-url", "mailto:ops@example.org"]),
            None,
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid API base URL 'mailto:ops@example.org': cannot be used as a base URL"
        );
    }

    #[test]
    fn init_is_suggested_only_for_missing_key_or_file() {
        let dir = tempdir().unwrap();
        let cli_missing_file = cli(&["--config", "/nonexistent/better-uptime.toml"]);
        let unreadable = ValidatedConfig::load_with_fallback(&cli_missing_file, None).unwrap_err();

        assert!(ConfigError::MissingApiKey.suggests_init());
        assert!(unreadable.suggests_init());
        assert!(!ConfigError::ZeroTimeout.suggests_init());

        let path = dir.path().join("no-such-dir").join("config.toml");
        assert!(!write_default_config(&path).unwrap_err().suggests_init());
    }
}
