use crate::app_config::{AppConfig, PipelineMode};
use crate::ConfigError;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";
pub const DEFAULT_TRANSLATE_BASE_URL: &str =
    "https://translation.googleapis.com/language/translate/v2";

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
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    // An empty value behaves like an unset key; CI secrets often export "".
    let google_api_key = lookup("GOOGLE_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

    let log_level = or_default("AFFINITY_LOG_LEVEL", "info");

    let mode = or_default("AFFINITY_MODE", "basic")
        .parse::<PipelineMode>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "AFFINITY_MODE".to_string(),
            reason,
        })?;

    let brand_keywords = parse_keywords(&or_default("AFFINITY_BRAND_KEYWORDS", "Aura"));
    if brand_keywords.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "AFFINITY_BRAND_KEYWORDS".to_string(),
            reason: "at least one keyword is required".to_string(),
        });
    }

    let city_list_path = PathBuf::from(or_default(
        "AFFINITY_CITY_LIST_PATH",
        "curation/city-list.txt",
    ));
    let locklist_path = PathBuf::from(or_default(
        "AFFINITY_LOCKLIST_PATH",
        "curation/locklist.csv",
    ));
    let output_path = PathBuf::from(or_default("AFFINITY_OUTPUT_PATH", "aura-affinity.csv"));
    let timestamp_path = PathBuf::from(or_default("AFFINITY_TIMESTAMP_PATH", "last-run.txt"));

    let places_base_url = or_default("AFFINITY_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    let translate_base_url = or_default("AFFINITY_TRANSLATE_BASE_URL", DEFAULT_TRANSLATE_BASE_URL);

    let request_timeout_secs = parse_u64("AFFINITY_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("AFFINITY_USER_AGENT", "aura-affinity/0.1 (directory-builder)");

    Ok(AppConfig {
        google_api_key,
        log_level,
        mode,
        brand_keywords,
        city_list_path,
        locklist_path,
        output_path,
        timestamp_path,
        places_base_url,
        translate_base_url,
        request_timeout_secs,
        user_agent,
    })
}

/// Split a comma-separated keyword list, trimming and dropping blanks.
fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
