//! Backend Configuration
//!
//! The admin backend location and credentials come from the
//! environment; everything else about the app is stateless.

const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Connection settings for the admin backend
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL, no trailing slash
    pub base_url: String,
    /// Optional bearer token attached to every request
    pub auth_token: Option<String>,
}

impl ApiConfig {
    /// Read configuration from `CATMAP_API_BASE` / `CATMAP_API_TOKEN`.
    pub fn from_env() -> Self {
        let base_url = std::env::var("CATMAP_API_BASE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let auth_token = std::env::var("CATMAP_API_TOKEN")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Self {
            base_url: normalize_base_url(&base_url),
            auth_token,
        }
    }

    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            auth_token: None,
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ApiConfig::new("https://admin.example.com/");
        assert_eq!(config.base_url, "https://admin.example.com");
    }

    #[test]
    fn test_plain_base_is_unchanged() {
        let config = ApiConfig::new("https://admin.example.com");
        assert_eq!(config.base_url, "https://admin.example.com");
    }

    #[test]
    fn test_env_fallback_to_default() {
        std::env::remove_var("CATMAP_API_BASE");
        let config = ApiConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_API_BASE);
    }
}
