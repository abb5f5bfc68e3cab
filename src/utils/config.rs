//! Configuration file support
//!
//! A `doctex.toml` file may set the compile server and encoder options.
//! Command-line flags take precedence over file values.

use crate::core::encoder::EncodeOptions;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Default configuration file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "doctex.toml";

/// Values read from a configuration file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the compile service (e.g. `http://localhost:8080`)
    pub server: Option<String>,
    /// Character that marks a directive paragraph
    pub directive_marker: Option<char>,
    /// Word wrapped in a highlight box; an empty string disables highlighting
    pub highlight_word: Option<String>,
    /// Treat unknown directives as fatal errors
    pub strict: Option<bool>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "failed to read config: {}", err),
            ConfigError::Parse(err) => write!(f, "failed to parse config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(ConfigError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load `doctex.toml` from `dir` if present.
    pub fn discover(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        log::debug!("loading config from {}", path.display());
        Self::load(&path).map(Some)
    }

    /// Apply the file values onto encoder options.
    pub fn apply(&self, options: &mut EncodeOptions) {
        if let Some(marker) = self.directive_marker {
            options.directive_marker = marker;
        }
        if let Some(word) = &self.highlight_word {
            options.highlight_word = if word.is_empty() {
                None
            } else {
                Some(word.clone())
            };
        }
        if let Some(strict) = self.strict {
            options.strict_directives = strict;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml_str(
            r#"
server = "http://localhost:8080"
directive_marker = "!"
highlight_word = "FIXME"
strict = true
"#,
        )
        .unwrap();
        assert_eq!(config.server.as_deref(), Some("http://localhost:8080"));

        let mut options = EncodeOptions::default();
        config.apply(&mut options);
        assert_eq!(options.directive_marker, '!');
        assert_eq!(options.highlight_word.as_deref(), Some("FIXME"));
        assert!(options.strict_directives);
    }

    #[test]
    fn test_empty_highlight_disables() {
        let config = Config::from_toml_str("highlight_word = \"\"").unwrap();
        let mut options = EncodeOptions::default();
        config.apply(&mut options);
        assert_eq!(options.highlight_word, None);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            Config::from_toml_str("colour = \"red\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_discover_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap(), None);
    }
}
