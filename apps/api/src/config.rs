use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_SPREADSHEET_ID: &str = "1yIghg4F4l6VaGAS2hI7lVQnHfbH625RL87Dwe7af0Ss";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub spreadsheet_id: String,
    pub source_timeout_secs: u64,
    pub jobs_cache_ttl_secs: u64,
    /// Replaces the embedded fallback job dataset when set.
    pub fallback_jobs_path: Option<PathBuf>,
    /// Replaces the embedded company phrase directory when set.
    pub company_profiles_path: Option<PathBuf>,
    /// Fixed seed for the email accomplishment picker. Unset = seeded from entropy.
    pub email_rng_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            spreadsheet_id: std::env::var("SPREADSHEET_ID")
                .unwrap_or_else(|_| DEFAULT_SPREADSHEET_ID.to_string()),
            source_timeout_secs: parse_env("SOURCE_TIMEOUT_SECS", 10)?,
            jobs_cache_ttl_secs: parse_env("JOBS_CACHE_TTL_SECS", 60)?,
            fallback_jobs_path: optional_env("FALLBACK_JOBS_PATH").map(PathBuf::from),
            company_profiles_path: optional_env("COMPANY_PROFILES_PATH").map(PathBuf::from),
            email_rng_seed: optional_env("EMAIL_RNG_SEED")
                .map(|v| {
                    v.parse::<u64>()
                        .context("EMAIL_RNG_SEED must be an unsigned integer")
                })
                .transpose()?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            spreadsheet_id: DEFAULT_SPREADSHEET_ID.to_string(),
            source_timeout_secs: 10,
            jobs_cache_ttl_secs: 60,
            fallback_jobs_path: None,
            company_profiles_path: None,
            email_rng_seed: None,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}
