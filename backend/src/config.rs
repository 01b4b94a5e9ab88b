use env_logger::Builder;
use log::{info, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TRANSCRIPT_LANGUAGES: &[&str] = &["en", "hi"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY environment variable must be set")]
    MissingApiKey,
}

/// Startup configuration. Read once and handed to the services; nothing here
/// is reloaded at runtime.
#[derive(Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub transcript_languages: Vec<String>,
    pub allowed_origins: Option<Vec<String>>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("transcript_languages", &self.transcript_languages)
            .field("allowed_origins", &self.allowed_origins)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let gemini_api_key = non_blank("GEMINI_API_KEY").ok_or(ConfigError::MissingApiKey)?;

        let transcript_languages = non_blank("TRANSCRIPT_LANGUAGES")
            .map(|v| split_list(&v))
            .filter(|langs| !langs.is_empty())
            .unwrap_or_else(|| {
                DEFAULT_TRANSCRIPT_LANGUAGES
                    .iter()
                    .map(|l| l.to_string())
                    .collect()
            });

        Ok(Self {
            gemini_api_key,
            gemini_model: non_blank("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: non_blank("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            transcript_languages,
            allowed_origins: non_blank("ALLOWED_ORIGINS").map(|v| split_list(&v)),
        })
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

pub fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    info!("Starting summarizer backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_cors(allowed_origins: Option<&[String]>) -> anyhow::Result<rocket_cors::Cors> {
    let origins = match allowed_origins {
        Some(origins) => AllowedOrigins::some_exact(origins),
        None => AllowedOrigins::all(),
    };

    let cors = CorsOptions::default()
        .allowed_origins(origins)
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_fails() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_blank_api_key_fails() {
        let result = AppConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "   ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "secret")])).unwrap();
        assert_eq!(config.gemini_api_key, "secret");
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.transcript_languages, vec!["en", "hi"]);
        assert!(config.allowed_origins.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-2.5-pro"),
            ("GEMINI_BASE_URL", "http://localhost:9999"),
            ("TRANSCRIPT_LANGUAGES", "de, en ,,"),
            ("ALLOWED_ORIGINS", "http://localhost:8080"),
        ]))
        .unwrap();
        assert_eq!(config.gemini_model, "gemini-2.5-pro");
        assert_eq!(config.gemini_base_url, "http://localhost:9999");
        assert_eq!(config.transcript_languages, vec!["de", "en"]);
        assert_eq!(
            config.allowed_origins,
            Some(vec!["http://localhost:8080".to_string()])
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = AppConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "secret")])).unwrap();
        assert!(!format!("{config:?}").contains("secret"));
    }
}
