use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if an env var holds a value that fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if an env var holds a value that fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
///
/// Every var has a default or is optional, so an empty environment yields a
/// working local config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_f32 = |var: &str, default: &str| -> Result<f32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f32>().map_err(|e| ConfigError::InvalidEnvVar {
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

    let log_level = or_default("FAQBOT_LOG_LEVEL", "info");
    let faqs_path = PathBuf::from(or_default("FAQBOT_FAQS_PATH", "./data/faqs.yaml"));
    let confidence_threshold = parse_f32("FAQBOT_CONFIDENCE_THRESHOLD", "0.60")?;

    let embed_url = lookup("FAQBOT_EMBED_URL").ok();
    let handoff_webhook_url = lookup("FAQBOT_HANDOFF_WEBHOOK_URL").ok();

    let request_timeout_secs = parse_u64("FAQBOT_REQUEST_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        log_level,
        faqs_path,
        confidence_threshold,
        embed_url,
        handoff_webhook_url,
        request_timeout_secs,
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
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.faqs_path.to_string_lossy(), "./data/faqs.yaml");
        assert!((cfg.confidence_threshold - 0.60).abs() < f32::EPSILON);
        assert!(cfg.embed_url.is_none());
        assert!(cfg.handoff_webhook_url.is_none());
        assert_eq!(cfg.request_timeout_secs, 30);
    }

    #[test]
    fn build_app_config_log_level_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("FAQBOT_LOG_LEVEL", "debug");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn build_app_config_faqs_path_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("FAQBOT_FAQS_PATH", "/etc/faqbot/faqs.yaml");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.faqs_path.to_string_lossy(), "/etc/faqbot/faqs.yaml");
    }

    #[test]
    fn build_app_config_confidence_threshold_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("FAQBOT_CONFIDENCE_THRESHOLD", "0.85");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!((cfg.confidence_threshold - 0.85).abs() < f32::EPSILON);
    }

    #[test]
    fn build_app_config_confidence_threshold_invalid() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("FAQBOT_CONFIDENCE_THRESHOLD", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FAQBOT_CONFIDENCE_THRESHOLD"),
            "expected InvalidEnvVar(FAQBOT_CONFIDENCE_THRESHOLD), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_confidence_threshold_out_of_range_is_accepted() {
        // Range misconfiguration is absorbed by the handoff decision's clamp,
        // not rejected at load time.
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("FAQBOT_CONFIDENCE_THRESHOLD", "1.5");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!((cfg.confidence_threshold - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn build_app_config_embed_url_present() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("FAQBOT_EMBED_URL", "http://localhost:8080");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.embed_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn build_app_config_webhook_url_present() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("FAQBOT_HANDOFF_WEBHOOK_URL", "https://hooks.example/T/B/x");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.handoff_webhook_url.as_deref(),
            Some("https://hooks.example/T/B/x")
        );
    }

    #[test]
    fn build_app_config_request_timeout_secs_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("FAQBOT_REQUEST_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn build_app_config_request_timeout_secs_invalid() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("FAQBOT_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FAQBOT_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(FAQBOT_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn debug_redacts_webhook_url() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("FAQBOT_HANDOFF_WEBHOOK_URL", "https://hooks.example/T/B/x");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(
            !rendered.contains("hooks.example"),
            "webhook URL leaked into Debug output: {rendered}"
        );
        assert!(rendered.contains("[redacted]"));
    }
}
