use std::env;

use super::env::{
    AppConfig, ConfigError, DirectoryConfig, LoggingConfig, ModelConfig, RateLimitConfig,
};

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let port = parse_or("PORT", 5000)?;

        let model = ModelConfig {
            artifact_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "models/spam_classifier.json".to_string()),
        };

        let directories = DirectoryConfig {
            logs_dir: env::var("LOGS_DIR").unwrap_or_else(|_| "logs".to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        let rate_limit = RateLimitConfig {
            predict_per_minute: parse_or("PREDICT_LIMIT_PER_MINUTE", 10)?,
            per_hour: parse_or("LIMIT_PER_HOUR", 50)?,
            per_day: parse_or("LIMIT_PER_DAY", 200)?,
        };

        Ok(Self {
            port,
            model,
            directories,
            logging,
            rate_limit,
        })
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(key, value)),
        Err(_) => Ok(default),
    }
}
