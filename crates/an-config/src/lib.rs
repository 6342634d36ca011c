mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "AN_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".al-nakhwa";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_DIR: &str = "storage";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
