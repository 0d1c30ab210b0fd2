use crate::app_config::AppConfig;
use crate::ConfigError;

/// Production endpoint for the external places nearby-search API.
const DEFAULT_PLACES_BASE_URL: &str =
    "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if an env var value cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if an env var value cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the real environment so it
/// can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // An empty key is equivalent to an absent one: the primary source is
    // unconfigured and the internal directory serves every request.
    let places_api_key = lookup("CAREFIND_PLACES_API_KEY")
        .ok()
        .filter(|k| !k.is_empty());

    let places_base_url = or_default("CAREFIND_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    let search_radius_meters = parse_u32("CAREFIND_SEARCH_RADIUS_METERS", "5000")?;
    let location_timeout_secs = parse_u64("CAREFIND_LOCATION_TIMEOUT_SECS", "10")?;
    let http_timeout_secs = parse_u64("CAREFIND_HTTP_TIMEOUT_SECS", "30")?;
    let log_level = or_default("CAREFIND_LOG_LEVEL", "info");

    Ok(AppConfig {
        places_api_key,
        places_base_url,
        search_radius_meters,
        location_timeout_secs,
        http_timeout_secs,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn defaults_apply_with_empty_environment() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.places_api_key.is_none());
        assert_eq!(cfg.places_base_url, DEFAULT_PLACES_BASE_URL);
        assert_eq!(cfg.search_radius_meters, 5000);
        assert_eq!(cfg.location_timeout_secs, 10);
        assert_eq!(cfg.http_timeout_secs, 30);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn empty_api_key_is_treated_as_unconfigured() {
        let mut map = HashMap::new();
        map.insert("CAREFIND_PLACES_API_KEY", "");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.places_api_key.is_none());
    }

    #[test]
    fn api_key_is_picked_up_when_present() {
        let mut map = HashMap::new();
        map.insert("CAREFIND_PLACES_API_KEY", "test-key");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.places_api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn radius_override_is_parsed() {
        let mut map = HashMap::new();
        map.insert("CAREFIND_SEARCH_RADIUS_METERS", "10000");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.search_radius_meters, 10_000);
    }

    #[test]
    fn invalid_radius_is_rejected() {
        let mut map = HashMap::new();
        map.insert("CAREFIND_SEARCH_RADIUS_METERS", "five-km");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CAREFIND_SEARCH_RADIUS_METERS"),
            "expected InvalidEnvVar(CAREFIND_SEARCH_RADIUS_METERS), got: {result:?}"
        );
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let mut map = HashMap::new();
        map.insert("CAREFIND_LOCATION_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CAREFIND_LOCATION_TIMEOUT_SECS"),
            "expected InvalidEnvVar(CAREFIND_LOCATION_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let mut map = HashMap::new();
        map.insert("CAREFIND_PLACES_API_KEY", "super-secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[redacted]"));
    }
}
