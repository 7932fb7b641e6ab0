use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, LogLevel,
    ServerConfig, UploadConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub upload: UploadConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for PROK_CONFIG_DIR env var, else use ./.prok/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PROK_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PROK_CONFIG_DIR env var > ./.prok/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("PROK_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".prok"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("PROK_SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PROK_SERVER_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!("Ignoring invalid PROK_SERVER_PORT value: {}", port),
            }
        }
        if let Ok(filename) = std::env::var("PROK_DATABASE_FILENAME") {
            self.database.filename = filename;
        }
        if let Ok(secret) = std::env::var("PROK_JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
        if let Ok(ttl) = std::env::var("PROK_TOKEN_TTL_SECS") {
            match ttl.parse() {
                Ok(ttl) => self.auth.token_ttl_secs = ttl,
                Err(_) => warn!("Ignoring invalid PROK_TOKEN_TTL_SECS value: {}", ttl),
            }
        }
        if let Ok(level) = std::env::var("PROK_LOG_LEVEL") {
            // FromStr never fails; unknown values fall back to info
            self.logging.level = LogLevel::from_str(&level).unwrap();
        }
        if let Ok(dir) = std::env::var("PROK_UPLOAD_DIR") {
            self.upload.dir = dir;
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.upload.validate()?;

        Ok(())
    }

    /// Absolute path of the SQLite database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.filename))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log effective settings at startup (secrets withheld).
    pub fn log_summary(&self) {
        info!("Server: {}", self.bind_addr());
        info!("Database file: {}", self.database.filename);
        info!(
            "Uploads: dir={} max_bytes={} extensions={:?}",
            self.upload.dir, self.upload.max_upload_bytes, self.upload.allowed_extensions
        );
        info!(
            "Images: primary {}x{} q{} / thumbnail {}x{} q{}",
            self.upload.primary_max_width,
            self.upload.primary_max_height,
            self.upload.primary_quality,
            self.upload.thumbnail_max_width,
            self.upload.thumbnail_max_height,
            self.upload.thumbnail_quality
        );
        info!("Token TTL: {}s", self.auth.token_ttl_secs);
        if self.auth.uses_default_secret() {
            warn!("auth.jwt_secret is the built-in development secret; set PROK_JWT_SECRET");
        }
    }
}
