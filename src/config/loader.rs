use std::env;

use crate::config::dto::{AppConfig, DatabaseConfig};
use crate::core::error::AppError;

const DEFAULT_PORT: &str = "5000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_SESSION_YEAR: u16 = 2025;

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            AppError::configuration(
                "DATABASE_URL environment variable is not set; add it to .env or the process environment"
                    .to_string(),
            )
        })?;

    let port = env::var("PORT")
        .unwrap_or_else(|_| DEFAULT_PORT.to_string())
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid PORT: {err}")))?;

    let database = DatabaseConfig {
        max_connections: parse_env("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS),
        acquire_timeout_secs: parse_env(
            "DATABASE_ACQUIRE_TIMEOUT_SECS",
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        ),
    };

    Ok(AppConfig {
        port,
        database_url,
        database,
        session_year: parse_env("LEGISCAN_SESSION_YEAR", DEFAULT_SESSION_YEAR),
    })
}

fn parse_env<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + PartialOrd + Default,
{
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<T>().ok())
        .filter(|value| *value > T::default())
        .unwrap_or(default)
}
