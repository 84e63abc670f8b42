use thiserror::Error;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub model: ModelConfig,
    pub directories: DirectoryConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub artifact_path: String,
}

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub logs_dir: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

/// Per-client request ceilings, keyed by remote address.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub predict_per_minute: u32,
    pub per_hour: u32,
    pub per_day: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {0}: {1}")]
    Invalid(&'static str, String),
}
