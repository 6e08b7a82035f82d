use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::SelectionStrategy;

/// Executable name of the bundled external matcher
pub const MATCHER_EXECUTABLE: &str = "fertil-matcher";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub delegated: DelegatedSettings,
    #[serde(default)]
    pub directory: DirectorySettings,
    #[serde(default)]
    pub inventory: InventorySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3001 }

/// Which matching backend to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendSetting {
    /// Decide from the process environment at startup
    #[default]
    Auto,
    Embedded,
    Delegated,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    #[serde(default)]
    pub backend: BackendSetting,
    /// Fixed RNG seed for the placeholder score
    pub seed: Option<u64>,
    #[serde(default)]
    pub strategy: SelectionStrategy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DelegatedSettings {
    /// Matcher program; defaults to the bundled executable next to this binary
    pub program: Option<String>,
    /// Arguments placed before the positional query arguments
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for DelegatedSettings {
    fn default() -> Self {
        Self {
            program: None,
            args: Vec::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_timeout_ms() -> u64 { 5000 }

impl DelegatedSettings {
    /// Resolve the program to spawn
    ///
    /// Falls back to the bundled matcher in the directory of `current_exe`,
    /// or a bare name looked up on `PATH` when that is unknown.
    pub fn resolve_program(&self, current_exe: Option<&Path>) -> PathBuf {
        match &self.program {
            Some(program) => PathBuf::from(program),
            None => current_exe
                .map(|exe| exe.with_file_name(MATCHER_EXECUTABLE))
                .unwrap_or_else(|| PathBuf::from(MATCHER_EXECUTABLE)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorySettings {
    /// JSON fixture replacing the compiled-in directory
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InventorySettings {
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

fn default_low_stock_threshold() -> u32 { 20 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FERTIL_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FERTIL__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("FERTIL")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
