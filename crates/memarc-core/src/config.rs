//! Configuration management
//!
//! Settings are resolved in this order, later sources winning:
//! 1. Built-in defaults
//! 2. `config.toml` (explicit path, or `~/.memarc/config.toml` if present)
//! 3. Environment variables (`MEMARC_DB_PATH`, `MEMARC_DEFAULT_TYPE`, `MEMARC_PREVIEW_WIDTH`)
//!
//! Command-line flags are applied on top by the binary. `${VAR_NAME}`
//! references inside the config file are expanded from the environment.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::entry::DEFAULT_ENTRY_TYPE;
use crate::{Error, Result};

/// Name of the per-user application directory under `$HOME`
pub const APP_DIR: &str = ".memarc";

const DB_FILE: &str = "memarc.db";
const CONFIG_FILE: &str = "config.toml";

/// Resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the SQLite archive file
    pub db_path: PathBuf,
    /// Type given to new entries when none is passed
    pub default_type: String,
    /// Maximum characters of content shown in listings
    pub preview_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            default_type: DEFAULT_ENTRY_TYPE.to_string(),
            preview_width: default_preview_width(),
        }
    }
}

fn default_preview_width() -> usize {
    60
}

/// `$HOME/.memarc`, or `./.memarc` when no home directory is known
pub fn app_dir() -> PathBuf {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn default_db_path() -> PathBuf {
    app_dir().join(DB_FILE)
}

fn default_config_path() -> PathBuf {
    app_dir().join(CONFIG_FILE)
}

impl Config {
    /// Replace `${VAR_NAME}` references using `lookup`.
    ///
    /// Unknown variables expand to the empty string.
    fn expand_env_vars(value: &str, lookup: &impl Fn(&str) -> Option<String>) -> String {
        let mut result = String::new();
        let mut chars = value.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '$' && chars.peek() == Some(&'{') {
                chars.next();

                let mut var_name = String::new();
                for c in chars.by_ref() {
                    if c == '}' {
                        break;
                    }
                    var_name.push(c);
                }

                if let Some(env_value) = lookup(&var_name) {
                    result.push_str(&env_value);
                }
            } else {
                result.push(c);
            }
        }

        result
    }

    /// Parse TOML settings on top of the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, &env_lookup)
    }

    fn from_toml_str_with(
        content: &str,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let expanded = Self::expand_env_vars(content, lookup);
        let toml: TomlConfig = toml::from_str(&expanded)
            .map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))?;
        Self::from_toml_config(toml)
    }

    /// Read settings from a TOML file on top of the defaults
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Resolve the full configuration.
    ///
    /// `explicit` must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_toml_file(path)?,
            None => {
                let path = default_config_path();
                if path.exists() {
                    Self::from_toml_file(&path)?
                } else {
                    debug!("No config file at {}, using defaults", path.display());
                    Self::default()
                }
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Override settings from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(&env_lookup);
    }

    /// Override settings from `lookup`, which maps variable names to values
    pub fn apply_overrides(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("MEMARC_DB_PATH").filter(|p| !p.is_empty()) {
            self.db_path = PathBuf::from(path);
        }
        if let Some(entry_type) = lookup("MEMARC_DEFAULT_TYPE").filter(|t| !t.is_empty()) {
            self.default_type = entry_type;
        }
        if let Some(width) = lookup("MEMARC_PREVIEW_WIDTH") {
            match width.parse::<usize>() {
                Ok(w) if w > 0 => self.preview_width = w,
                _ => warn!("Ignoring invalid MEMARC_PREVIEW_WIDTH: {}", width),
            }
        }
    }

    fn from_toml_config(toml: TomlConfig) -> Result<Self> {
        let defaults = Self::default();

        let storage = toml.storage.unwrap_or_default();
        let entries = toml.entries.unwrap_or_default();
        let display = toml.display.unwrap_or_default();

        let preview_width = display.preview_width.unwrap_or(defaults.preview_width);
        if preview_width == 0 {
            return Err(Error::Config("display.preview_width must be positive".to_string()));
        }

        Ok(Config {
            db_path: storage.db_path.unwrap_or(defaults.db_path),
            default_type: entries.default_type.unwrap_or(defaults.default_type),
            preview_width,
        })
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

// ============================================================================
// TOML file layout
// ============================================================================

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    storage: Option<TomlStorageConfig>,
    entries: Option<TomlEntriesConfig>,
    display: Option<TomlDisplayConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct TomlStorageConfig {
    #[serde(default)]
    db_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
struct TomlEntriesConfig {
    #[serde(default)]
    default_type: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct TomlDisplayConfig {
    #[serde(default)]
    preview_width: Option<usize>,
}
