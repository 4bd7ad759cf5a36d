//! Configuration types for soleconnect.
//!
//! [`Config::load`] reads `~/.config/soleconnect/config.toml`, creating it
//! with hardcoded defaults if it does not yet exist. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in
//! tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind = "127.0.0.1"
port = 8210

[directory]
per_page        = 10
top_rated_limit = 6
related_limit   = 3
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/soleconnect/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

/// `[server]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8210 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

/// `[directory]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// Listing page size.
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    /// How many shops the home page highlight asks for.
    #[serde(default = "default_top_rated_limit")]
    pub top_rated_limit: usize,
    /// Same-city suggestions on the detail view.
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

fn default_per_page() -> usize { 10 }
fn default_top_rated_limit() -> usize { 6 }
fn default_related_limit() -> usize { 3 }

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            top_rated_limit: default_top_rated_limit(),
            related_limit: default_related_limit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/soleconnect/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not
    /// exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("soleconnect")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
