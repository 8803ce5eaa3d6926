use docsite_engine::{ConvertOptions, DEFAULT_MAX_INPUT_BYTES, HeadingIdPolicy};
use glob::{MatchOptions, Pattern};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid exclude pattern {pattern:?}: {source}")]
    InvalidExcludePattern {
        pattern: String,
        source: glob::PatternError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the Markdown documents; `~` and `$VARS` are expanded on load.
    pub docs_path: PathBuf,
    /// Largest document accepted for conversion, in bytes. `0` disables the limit.
    pub max_input_bytes: usize,
    /// Suffix repeated heading ids with `-2`, `-3`, ...
    pub unique_heading_ids: bool,
    /// Glob patterns, relative to `docs_path`, of paths to leave out of the site.
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs_path: PathBuf::from("docs"),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            unique_heading_ids: false,
            exclude: vec![],
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded docs path
        config.docs_path = Self::expand_path(&config.docs_path).unwrap_or(config.docs_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/docsite");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Conversion settings for the engine.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            max_input_bytes: (self.max_input_bytes > 0).then_some(self.max_input_bytes),
            heading_ids: if self.unique_heading_ids {
                HeadingIdPolicy::Unique
            } else {
                HeadingIdPolicy::Slug
            },
        }
    }

    /// Compiles the `exclude` patterns.
    pub fn exclude_matcher(&self) -> Result<ExcludeMatcher, ConfigError> {
        let patterns = self
            .exclude
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| ConfigError::InvalidExcludePattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ExcludeMatcher { patterns })
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// Compiled `exclude` globs.
///
/// `*` stays within one path segment; `**` spans segments.
#[derive(Debug, Clone, Default)]
pub struct ExcludeMatcher {
    patterns: Vec<Pattern>,
}

impl ExcludeMatcher {
    const OPTIONS: MatchOptions = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    /// `path` is relative to the docs root and uses `/` separators.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| p.matches_with(path, Self::OPTIONS))
    }
}
