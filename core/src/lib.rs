//! tmphone-core
//!
//! Language-agnostic pieces shared by the `tmphone` encoder: the phonetic key
//! triple, key precision levels, the configuration file, and the prefix trie
//! used for longest-match glyph lookup.
//!
//! Public API:
//! - `PhoneticKeys` - The key0/key1/key2 triple produced for one word
//! - `KeyLevel` - Precision selector used when comparing words
//! - `TrieNode` - Char-keyed prefix trie carrying a value per entry
//! - `Config` - Configuration loaded from TOML
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod keys;
pub use keys::{KeyLevel, PhoneticKeys};

pub mod trie;
pub use trie::TrieNode;

/// How the command-line front end prints keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated `word key0 key1 key2`.
    #[default]
    Plain,
    /// One JSON object per word.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => f.write_str("plain"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" | "tsv" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected plain or json)", other)),
        }
    }
}

/// Configuration for the encoder front ends.
///
/// Encoding itself has no knobs; these options control how keys are
/// compared and printed. Fields missing from a TOML file take their
/// default values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Key precision used when deciding whether two words match.
    pub match_level: KeyLevel,

    /// Output format for printed keys.
    pub output: OutputFormat,

    /// Print the tagged token stream next to each word's keys.
    pub show_tokens: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // key1 keeps the consonant-variant digit, which separates most
            // orthographic near-misses without splitting on vowel length.
            match_level: KeyLevel::Medium,
            output: OutputFormat::Plain,
            show_tokens: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.trim().nfc().collect::<String>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let cfg = Config::default();
        let text = cfg.to_toml_string().unwrap();
        assert!(text.contains("match_level = \"medium\""));
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let cfg = Config::from_toml_str("output = \"json\"\n").unwrap();
        assert_eq!(cfg.output, OutputFormat::Json);
        assert_eq!(cfg.match_level, KeyLevel::Medium);
        assert!(!cfg.show_tokens);
    }

    #[test]
    fn invalid_level_is_rejected() {
        assert!(Config::from_toml_str("match_level = \"finest\"\n").is_err());
    }

    #[test]
    fn save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "tmphone_config_test_{}.toml",
            std::process::id()
        ));
        let cfg = Config {
            match_level: KeyLevel::Coarse,
            output: OutputFormat::Json,
            show_tokens: true,
        };
        cfg.save_toml(&path).unwrap();
        let loaded = Config::load_toml(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::load_toml("/nonexistent/tmphone.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tmphone.toml"));
    }

    #[test]
    fn output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("tsv".parse::<OutputFormat>(), Ok(OutputFormat::Plain));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn normalize_composes_vowel_signs() {
        // ெ + ா composes to ொ
        assert_eq!(utils::normalize(" மொ "), "மொ");
        assert_eq!(utils::normalize("\u{0BAE}\u{0BC6}\u{0BBE}"), "\u{0BAE}\u{0BCA}");
    }
}
