use std::{env, time::Duration};

use thiserror::Error;

use crate::activity::cache::CachePolicy;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Issue finding the {0} environment variable")]
    Missing(&'static str),
    #[error("Invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub directory_api_url: String,
    pub directory_timeout: Duration,
    /// `None` keeps cached activity for the whole process lifetime.
    pub activity_cache_ttl: Option<Duration>,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_value("PORT", required("PORT")?)?,
            database_url: required("DATABASE_URL")?,
            database_max_connections: match lookup("DATABASE_MAX_CONNECTIONS") {
                Some(value) => parse_value("DATABASE_MAX_CONNECTIONS", value)?,
                None => 5,
            },
            directory_api_url: required("DIRECTORY_API_URL")?,
            directory_timeout: Duration::from_secs(match lookup("DIRECTORY_TIMEOUT_SECS") {
                Some(value) => parse_value("DIRECTORY_TIMEOUT_SECS", value)?,
                None => 10,
            }),
            activity_cache_ttl: match lookup("ACTIVITY_CACHE_TTL_SECS") {
                Some(value) => Some(Duration::from_secs(parse_value(
                    "ACTIVITY_CACHE_TTL_SECS",
                    value,
                )?)),
                None => None,
            },
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn cache_policy(&self) -> CachePolicy {
        match self.activity_cache_ttl {
            Some(ttl) => CachePolicy::ExpireAfter(ttl),
            None => CachePolicy::ProcessLifetime,
        }
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}
