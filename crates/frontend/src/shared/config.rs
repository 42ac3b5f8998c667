//! Client configuration
//!
//! The only setting is the backend base URL. It is resolved once, in this order:
//! 1. `RESTO_API_BASE_URL` baked in at compile time
//! 2. `[api] base_url` of the embedded default configuration
//! 3. the page origin with the backend port (3000)

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiConfig {
    /// Empty string means "derive from the page location"
    #[serde(default)]
    pub base_url: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
"#;

/// Port the backend listens on when the base URL is derived from the page
pub const BACKEND_PORT: u16 = 3000;

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match parse_config(DEFAULT_CONFIG) {
    Ok(config) => config,
    Err(e) => {
        log::error!("Invalid embedded configuration: {}", e);
        AppConfig::default()
    }
});

pub fn parse_config(source: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(source)
}

pub fn config() -> &'static AppConfig {
    &CONFIG
}

/// Picks the first non-empty candidate, trimming a trailing slash
pub fn resolve_base_url(
    compile_time: Option<&str>,
    configured: &str,
    derived: impl FnOnce() -> String,
) -> String {
    let chosen = compile_time
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| Some(configured.trim()).filter(|s| !s.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(derived);
    chosen.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "");
    }

    #[test]
    fn test_missing_section_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.api.base_url.is_empty());
    }

    #[test]
    fn test_compile_time_wins() {
        let url = resolve_base_url(Some("https://api.example.com/"), "http://cfg", || {
            "http://derived".to_string()
        });
        assert_eq!(url, "https://api.example.com");
    }

    #[test]
    fn test_configured_then_derived() {
        assert_eq!(
            resolve_base_url(Some("  "), "http://cfg:8080", || "http://derived".into()),
            "http://cfg:8080"
        );
        assert_eq!(
            resolve_base_url(None, "", || "http://127.0.0.1:3000".into()),
            "http://127.0.0.1:3000"
        );
    }
}
