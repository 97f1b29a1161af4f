use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Stock file fetched when `VITRINE_CATALOG_URL` is not set.
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/grymzer/Mademoiselle-NIna-/refs/heads/main/stocks.json";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid.
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
/// Returns `ConfigError` if a value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("VITRINE_ENV", "development"));
    let log_level = or_default("VITRINE_LOG_LEVEL", "info");

    let catalog_url = or_default("VITRINE_CATALOG_URL", DEFAULT_CATALOG_URL);
    if !catalog_url.starts_with("http://") && !catalog_url.starts_with("https://") {
        return Err(ConfigError::InvalidEnvVar {
            var: "VITRINE_CATALOG_URL".to_string(),
            reason: format!("expected an http(s) URL, got \"{catalog_url}\""),
        });
    }

    let fetch_timeout_secs = parse_u64("VITRINE_FETCH_TIMEOUT_SECS", "30")?;
    if fetch_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "VITRINE_FETCH_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let user_agent = or_default("VITRINE_USER_AGENT", "vitrine/0.1 (catalog-browser)");
    let order_recipient = lookup("VITRINE_ORDER_RECIPIENT")
        .ok()
        .filter(|s| !s.trim().is_empty());
    let order_subject = or_default("VITRINE_ORDER_SUBJECT", "Demande de réservation");
    let order_signature = or_default("VITRINE_ORDER_SIGNATURE", "");
    let order_payment_terms = lookup("VITRINE_ORDER_PAYMENT_TERMS")
        .ok()
        .filter(|s| !s.trim().is_empty());

    Ok(AppConfig {
        env,
        log_level,
        catalog_url,
        fetch_timeout_secs,
        user_agent,
        order_recipient,
        order_subject,
        order_signature,
        order_payment_terms,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
