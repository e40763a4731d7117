use crate::app_config::{AppConfig, DEFAULT_API_URL, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it from a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_buffer = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let value = or_default(var, default)
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(
                var,
                format!("buffer must be a finite, non-negative number of degrees, got {value}"),
            ));
        }
        Ok(value)
    };

    let api_url = or_default("FIREBALL_API_URL", DEFAULT_API_URL);
    let log_level = or_default("FIREBALL_LOG_LEVEL", "info");
    let buffer_degrees = parse_buffer("FIREBALL_BUFFER_DEGREES", "15")?;
    let request_timeout_secs = parse_u64("FIREBALL_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("FIREBALL_USER_AGENT", DEFAULT_USER_AGENT);
    let max_concurrent_lookups = parse_usize("FIREBALL_MAX_CONCURRENT_LOOKUPS", "0")?;

    Ok(AppConfig {
        api_url,
        log_level,
        buffer_degrees,
        request_timeout_secs,
        user_agent,
        max_concurrent_lookups,
    })
}
