use anyhow::{bail, Context, Result};

const DEFAULT_RECOMMENDATION_POOL_SIZE: i64 = 50;
const DEFAULT_MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    /// How many active jobs are scored per recommendation request.
    pub recommendation_pool_size: i64,
    pub max_resume_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            database_max_connections: optional_env(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            recommendation_pool_size: require_positive(
                "RECOMMENDATION_POOL_SIZE",
                optional_env("RECOMMENDATION_POOL_SIZE", DEFAULT_RECOMMENDATION_POOL_SIZE)?,
            )?,
            max_resume_bytes: optional_env("MAX_RESUME_BYTES", DEFAULT_MAX_RESUME_BYTES)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: String::new(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            port: 8080,
            rust_log: "info".to_string(),
            recommendation_pool_size: DEFAULT_RECOMMENDATION_POOL_SIZE,
            max_resume_bytes: DEFAULT_MAX_RESUME_BYTES,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Pool sizes feed a SQL `LIMIT`, which rejects negatives.
fn require_positive(key: &str, value: i64) -> Result<i64> {
    if value < 1 {
        bail!("Environment variable '{key}' must be at least 1 (got {value})");
    }
    Ok(value)
}

fn optional_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
