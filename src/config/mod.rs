pub mod env;
mod loader;

pub use env::{AppConfig, ConfigError, DirectoryConfig, LoggingConfig, ModelConfig, RateLimitConfig};
pub use loader::load_config;
