//! Configuration management for the parahash CLI.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Built-in defaults
//! - An optional YAML config file (`--config` / `PARAHASH_CONFIG`)
//! - Environment variables and command-line flags
//!
//! The result is a single `AppConfig` assembled once at startup and passed by
//! reference into the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{AppError, AppResult};

/// Default truncation length for paragraph titles.
pub const DEFAULT_PARA_TITLE_LEN: i64 = 4;

/// Default truncation length for the document title.
pub const DEFAULT_DOC_TITLE_LEN: i64 = 8;

/// Textual representation used for digest titles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Lowercase hexadecimal, two characters per byte.
    #[default]
    Hex,
    /// Big-integer base-58 with the Bitcoin alphabet.
    Base58,
    /// BIP-39 English mnemonic phrase.
    Bip39,
}

impl Representation {
    /// All supported representations, in help-text order.
    pub const ALL: [Representation; 3] = [Self::Hex, Self::Base58, Self::Bip39];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base58 => "base58",
            Self::Bip39 => "bip39",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Representation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rep| rep.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|r| r.as_str()).collect();
                AppError::Config(format!(
                    "Unknown representation: {}. Supported: {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input document (stdin when absent)
    pub input: Option<PathBuf>,

    /// Destination file (stdout when absent); created exclusively
    pub outfile: Option<PathBuf>,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Hash representation for all titles
    pub rep: Representation,

    /// Paragraph title length; zero or negative disables truncation
    pub ptlen: i64,

    /// Document title length; zero or negative disables truncation
    pub dtlen: i64,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    outline: Option<OutlineSection>,
    logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutlineSection {
    rep: Option<String>,
    ptlen: Option<i64>,
    dtlen: Option<i64>,
    outfile: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingSection {
    level: Option<String>,
    color: Option<bool>,
}

/// Command-line and environment values layered over the loaded config.
///
/// Every field is optional; `None` keeps whatever the config file or the
/// defaults provided.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub outfile: Option<String>,
    pub rep: Option<String>,
    pub ptlen: Option<i64>,
    pub dtlen: Option<i64>,
    pub log_level: Option<String>,
    pub verbose: bool,
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: None,
            outfile: None,
            config_file: None,
            rep: Representation::Hex,
            ptlen: DEFAULT_PARA_TITLE_LEN,
            dtlen: DEFAULT_DOC_TITLE_LEN,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults and an optional YAML file.
    ///
    /// A missing file that was explicitly requested is an error; there is no
    /// implicit config file lookup.
    ///
    /// # Example
    /// ```no_run
    /// use parahash_core::config::AppConfig;
    ///
    /// let config = AppConfig::load(None).expect("Failed to load config");
    /// assert_eq!(config.ptlen, 4);
    /// ```
    pub fn load(config_file: Option<&Path>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_file {
            config.config_file = Some(path.to_path_buf());
            config = config.merge_yaml(path)?;
        }

        Ok(config)
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        // An empty file deserializes to unit, not a mapping
        let config_file: ConfigFile = if contents.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(&contents)?
        };

        let mut result = self.clone();

        if let Some(outline) = config_file.outline {
            if let Some(rep) = outline.rep {
                result.rep = rep.parse()?;
            }
            if let Some(ptlen) = outline.ptlen {
                result.ptlen = ptlen;
            }
            if let Some(dtlen) = outline.dtlen {
                result.dtlen = dtlen;
            }
            if let Some(outfile) = outline.outfile {
                result.outfile = non_empty_path(outfile);
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        tracing::debug!("Merged config file {:?}", path);
        Ok(result)
    }

    /// Apply CLI and environment overrides to the configuration.
    ///
    /// Flags take precedence over the config file. An empty `outfile`
    /// selects stdout.
    pub fn with_overrides(mut self, overrides: Overrides) -> AppResult<Self> {
        if let Some(input) = overrides.input {
            self.input = Some(input);
        }

        if let Some(outfile) = overrides.outfile {
            self.outfile = non_empty_path(outfile);
        }

        if let Some(rep) = overrides.rep {
            self.rep = rep.parse()?;
        }

        if let Some(ptlen) = overrides.ptlen {
            self.ptlen = ptlen;
        }

        if let Some(dtlen) = overrides.dtlen {
            self.dtlen = dtlen;
        }

        if let Some(log_level) = overrides.log_level {
            self.log_level = Some(log_level);
        }

        if overrides.verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if overrides.no_color {
            self.no_color = true;
        }

        Ok(self)
    }

    /// Validate the assembled configuration before any file is touched.
    pub fn validate(&self) -> AppResult<()> {
        if let (Some(input), Some(outfile)) = (&self.input, &self.outfile) {
            if input == outfile {
                return Err(AppError::Config(format!(
                    "Input and output refer to the same path: {:?}",
                    input
                )));
            }
        }

        if let Some(ref input) = self.input {
            if input.is_dir() {
                return Err(AppError::Config(format!(
                    "Input path is a directory: {:?}",
                    input
                )));
            }
        }

        Ok(())
    }
}

fn non_empty_path(value: String) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}
