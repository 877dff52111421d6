//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    dictionary::DictionaryConfig, search::SearchConfig, trie::TrieSettings, ConfigLoader,
    LanaiConfig, LogConfig, Validate,
};
use crate::error::config::ConfigError;
use crate::tests::test_utils::TestFixture;
use test_case::test_case;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = LanaiConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.search.default_prefix, "bar");
    assert_eq!(config.search.default_limit, 6);
    assert!(config.trie.node_limit.is_none());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = LanaiConfig::default();

    config.search.default_limit = 0;
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.search.default_limit = 6;
    config.trie.max_word_len = Some(0);
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.trie.max_word_len = Some(64);
    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test that validation fails for the individual sections.
#[test]
fn test_specific_validation_rules() {
    let dictionary = DictionaryConfig {
        path: Default::default(),
        ..Default::default()
    };
    assert!(dictionary.validate().is_err());

    let search = SearchConfig {
        default_limit: 20,
        max_limit: 10,
        ..Default::default()
    };
    assert!(matches!(
        search.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    let trie = TrieSettings {
        max_word_len: None,
        node_limit: Some(0),
    };
    assert!(trie.validate().is_err());

    let log = LogConfig {
        level: String::new(),
        ..Default::default()
    };
    assert!(log.validate().is_err());
}

#[test_case(None, Ok(6); "default limit")]
#[test_case(Some(0), Ok(0); "zero limit")]
#[test_case(Some(10_000), Ok(10_000); "maximum limit")]
#[test_case(Some(10_001), Err(()); "limit above maximum")]
fn test_resolve_limit(requested: Option<usize>, expected: Result<usize, ()>) {
    let search = SearchConfig::default();
    let resolved = search.resolve_limit(requested).map_err(|_| ());
    assert_eq!(resolved, expected);
}

/// Test that trie settings produce a matching trie configuration.
#[test]
fn test_trie_settings_to_config() {
    let settings = TrieSettings {
        max_word_len: Some(32),
        node_limit: Some(1_000),
    };
    let config = settings.to_trie_config();
    assert_eq!(config.max_word_len(), Some(32));
    assert_eq!(config.node_limit(), Some(1_000));

    let config = TrieSettings::default().to_trie_config();
    assert_eq!(config.max_word_len(), None);
    assert_eq!(config.node_limit(), None);
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.toml",
            r#"
    [dictionary]
    path = "/tmp/words"
    trim_whitespace = true

    [search]
    default_prefix = "kai"

    [trie]
    max_word_len = 128
    "#,
        )
        .unwrap();

    // Load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "LANAI_TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.dictionary.path.to_str(), Some("/tmp/words"));
    assert!(config.dictionary.trim_whitespace);
    assert_eq!(config.search.default_prefix, "kai");
    assert_eq!(config.trie.max_word_len, Some(128));

    // Other values should be defaults
    assert!(config.dictionary.skip_empty_lines);
    assert_eq!(config.search.default_limit, 6);
    assert_eq!(config.trie.node_limit, None);
    assert_eq!(config.log.level, "warn");
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_env_test.toml",
            r#"
    [search]
    default_prefix = "kai"
    default_limit = 3
    "#,
        )
        .unwrap();

    fixture.set_env("LANAI_TEST_ENV__SEARCH__DEFAULT_LIMIT", "12");
    fixture.set_env("LANAI_TEST_ENV__LOG__LEVEL", "debug");

    let loader = ConfigLoader::new(Some(&config_path), "LANAI_TEST_ENV");
    let config = loader.load().unwrap();

    // Environment variables take precedence over the file
    assert_eq!(config.search.default_limit, 12);
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.search.default_prefix, "kai");
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "invalid.toml",
            r#"
    [search
    default_prefix = kai"
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "LANAI_TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that values failing validation are rejected at load time.
#[test]
fn test_load_rejects_invalid_values() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("zero.toml", "[trie]\nnode_limit = 0\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "LANAI_TEST_ZERO");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::ValidationError(_))
    ));
}

/// Test the errors for missing files and unknown formats.
#[test]
fn test_load_missing_and_unsupported() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("missing.toml");
    let loader = ConfigLoader::new(Some(&missing), "LANAI_TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));

    let ini = fixture.create_file("config.ini", "[search]\n").unwrap();
    let loader = ConfigLoader::new(Some(&ini), "LANAI_TEST_INI");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that a generated configuration loads back unchanged.
#[test]
fn test_generated_config_loads() {
    let fixture = TestFixture::new().unwrap();
    let toml = toml::to_string_pretty(&LanaiConfig::default()).unwrap();
    let config_path = fixture.create_file("generated.toml", toml).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "LANAI_TEST_GENERATED");
    let config = loader.load().unwrap();
    assert_eq!(config.search.default_prefix, "bar");
    assert_eq!(config.dictionary.path, DictionaryConfig::default().path);
}
