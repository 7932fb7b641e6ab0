mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod upload_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use upload_config::UploadConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_FILENAME: &str = "prok.db";
const DEFAULT_JWT_SECRET: &str = "jwt-secret-key";
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_UPLOAD_DIRECTORY: &str = "uploads";
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 2 * 1024 * 1024;
const DEFAULT_ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];
const DEFAULT_PRIMARY_MAX_DIMENSION: u32 = 400;
const DEFAULT_THUMBNAIL_MAX_DIMENSION: u32 = 128;
const DEFAULT_PRIMARY_QUALITY: u8 = 85;
const DEFAULT_THUMBNAIL_QUALITY: u8 = 80;
