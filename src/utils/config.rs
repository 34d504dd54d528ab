use std::{ops::RangeInclusive, str::FromStr};

use crate::models::error::ConfigError;

/// Longest accepted revalidation interval, one year.
pub const MAX_REVALIDATE_SECONDS: i64 = 31_536_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub ergast_base_url: String,
    pub revalidate_seconds: i64,
    pub request_timeout_seconds: u64,
    pub max_concurrent_requests: usize,
    pub min_request_delay_ms: u64,
    pub prebuild_on_startup: bool,
    pub projects_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "127.0.0.1:3000".to_string(),
            ergast_base_url: "https://api.jolpi.ca/ergast/f1".to_string(),
            revalidate_seconds: 100,
            request_timeout_seconds: 30,
            max_concurrent_requests: 4,
            min_request_delay_ms: 250,
            prebuild_on_startup: true,
            projects_path: None,
        }
    }
}

impl Config {
    pub fn init() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        Ok(Config {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            ergast_base_url: lookup("ERGAST_BASE_URL").unwrap_or(defaults.ergast_base_url),
            revalidate_seconds: parse_in_range(
                &lookup,
                "REVALIDATE_SECONDS",
                defaults.revalidate_seconds,
                1..=MAX_REVALIDATE_SECONDS,
            )?,
            request_timeout_seconds: parse_or(
                &lookup,
                "REQUEST_TIMEOUT_SECONDS",
                defaults.request_timeout_seconds,
            )?,
            max_concurrent_requests: parse_or(
                &lookup,
                "MAX_CONCURRENT_REQUESTS",
                defaults.max_concurrent_requests,
            )?,
            min_request_delay_ms: parse_or(&lookup, "MIN_REQUEST_DELAY_MS", defaults.min_request_delay_ms)?,
            prebuild_on_startup: parse_or(&lookup, "PREBUILD_ON_STARTUP", defaults.prebuild_on_startup)?,
            projects_path: lookup("PROJECTS_PATH").filter(|p| !p.is_empty()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

fn parse_in_range<F>(
    lookup: &F,
    key: &'static str,
    default: i64,
    range: RangeInclusive<i64>,
) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or(lookup, key, default)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        })
    }
}
