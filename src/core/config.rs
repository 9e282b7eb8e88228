//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.jotter/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::note::{DEFAULT_COLOR, DEFAULT_PALETTE};
use crate::core::storage::{DEFAULT_KEY, STORE_FILE, default_store_path};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct JotterConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub notes: NotesConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Store file; relative paths are taken from `~/.jotter/`.
    pub path: Option<String>,
    pub key: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NotesConfig {
    pub default_color: Option<String>,
    pub palette: Option<Vec<String>>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// `None` keeps notes in memory only.
    pub store_path: Option<PathBuf>,
    pub storage_key: String,
    pub default_color: String,
    pub palette: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path().or_else(|| Some(PathBuf::from(STORE_FILE))),
            storage_key: DEFAULT_KEY.to_string(),
            default_color: DEFAULT_COLOR.to_string(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Values taken from command line flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub store: Option<PathBuf>,
    pub key: Option<String>,
    pub ephemeral: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.jotter/`.
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".jotter"))
}

/// Returns the path to `~/.jotter/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.jotter/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `JotterConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<JotterConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(JotterConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(JotterConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<JotterConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: JotterConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Jotter Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [storage]
# path = "storage.json"              # Relative to ~/.jotter/, or JOTTER_STORE
# key = "notes"                      # Or JOTTER_KEY

# [notes]
# default_color = "white"            # Or JOTTER_DEFAULT_COLOR
# palette = ["white", "red", "orange", "yellow", "green", "teal",
#            "blue", "darkblue", "purple", "pink", "brown", "gray"]
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &JotterConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |name| std::env::var(name).ok())
}

/// Same as `resolve`, with the environment supplied by the caller.
pub fn resolve_with_env(
    config: &JotterConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    // Store path: CLI → env → config → default
    let store_path = if cli.ephemeral {
        None
    } else {
        cli.store
            .clone()
            .or_else(|| env("JOTTER_STORE").map(PathBuf::from))
            .or_else(|| config.storage.path.as_deref().map(relative_to_data_dir))
            .or(defaults.store_path)
    };

    // Storage key: CLI → env → config → default
    let storage_key = cli
        .key
        .clone()
        .or_else(|| env("JOTTER_KEY"))
        .or_else(|| config.storage.key.clone())
        .filter(|k| !k.trim().is_empty())
        .unwrap_or(defaults.storage_key);

    // Palette: config → default. An empty list would leave nothing to pick.
    let palette = config
        .notes
        .palette
        .clone()
        .filter(|p| !p.is_empty())
        .unwrap_or(defaults.palette);

    // Default color: env → config → default
    let default_color = env("JOTTER_DEFAULT_COLOR")
        .or_else(|| config.notes.default_color.clone())
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(defaults.default_color);

    ResolvedConfig {
        store_path,
        storage_key,
        default_color,
        palette,
    }
}

fn relative_to_data_dir(raw: &str) -> PathBuf {
    let path = PathBuf::from(raw);
    if path.is_absolute() {
        return path;
    }
    match data_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}
