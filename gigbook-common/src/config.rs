//! Configuration loading and resolution
//!
//! Settings are resolved once at startup into an [`AppConfig`] that is passed
//! explicitly to whatever needs it. Priority order:
//! 1. Command-line argument / environment variable (`ConfigOverrides`)
//! 2. TOML config file
//! 3. Compiled defaults
//!
//! A missing TOML file is not an error; startup continues with defaults.

use crate::{Error, Result};
use rand::RngCore;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Application directory name under the platform config/data dirs
pub const APP_DIR: &str = "gigbook";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CSRF_TIME_LIMIT_SECS: u64 = 3600;

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Path to SQLite database file
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Interface to bind
    #[serde(default)]
    pub host: Option<String>,

    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// Key used to sign anti-forgery tokens
    #[serde(default)]
    pub secret_key: Option<String>,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub csrf: CsrfConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr only if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Anti-forgery protection settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CsrfConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum token age in seconds
    #[serde(default = "default_csrf_time_limit")]
    pub time_limit_secs: u64,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            time_limit_secs: DEFAULT_CSRF_TIME_LIMIT_SECS,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_csrf_time_limit() -> u64 {
    DEFAULT_CSRF_TIME_LIMIT_SECS
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load the config file, or fall back to defaults when it does not exist
    ///
    /// `path` of `None` means the platform default location. An explicit path
    /// that is missing is also tolerated with a warning; a file that exists but
    /// fails to parse is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let candidate = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_file(),
        };

        match candidate {
            Some(p) if p.exists() => {
                info!("Loading config file: {}", p.display());
                Self::load(&p)
            }
            Some(p) => {
                warn!("Config file not found: {} (using defaults)", p.display());
                Ok(Self::default())
            }
            None => {
                warn!("Could not determine config directory (using defaults)");
                Ok(Self::default())
            }
        }
    }
}

/// Values supplied on the command line or through environment variables
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub database_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub secret_key: Option<String>,
    pub log_level: Option<String>,
}

/// Fully resolved application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub secret_key: String,
    pub csrf_enabled: bool,
    pub csrf_time_limit: Duration,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Merge overrides, TOML values and defaults
    pub fn resolve(overrides: ConfigOverrides, toml: TomlConfig) -> Self {
        let database_path = overrides
            .database_path
            .or(toml.database_path)
            .unwrap_or_else(default_database_path);

        let host = overrides
            .host
            .or(toml.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = overrides.port.or(toml.port).unwrap_or(DEFAULT_PORT);

        let secret_key = match overrides
            .secret_key
            .or(toml.secret_key)
            .filter(|k| !k.trim().is_empty())
        {
            Some(key) => key,
            None => {
                warn!("No secret key configured; generated a random one (tokens won't survive restart)");
                generate_secret_key()
            }
        };

        let mut logging = toml.logging;
        if let Some(level) = overrides.log_level {
            logging.level = level;
        }

        Self {
            database_path,
            host,
            port,
            secret_key,
            csrf_enabled: toml.csrf.enabled,
            csrf_time_limit: Duration::from_secs(toml.csrf.time_limit_secs),
            logging,
        }
    }

    /// Address string for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Configuration for tests: fixed key, in-memory friendly defaults
    pub fn for_tests(secret_key: &str) -> Self {
        Self {
            database_path: PathBuf::from(":memory:"),
            host: DEFAULT_HOST.to_string(),
            port: 0,
            secret_key: secret_key.to_string(),
            csrf_enabled: true,
            csrf_time_limit: Duration::from_secs(DEFAULT_CSRF_TIME_LIMIT_SECS),
            logging: LoggingConfig::default(),
        }
    }
}

/// Default configuration file path (`<config dir>/gigbook/config.toml`)
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

/// OS-dependent default database path
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("./gigbook_data"))
        .join("gigbook.db")
}

/// Random 32-byte secret key as 64 hex characters
pub fn generate_secret_key() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
