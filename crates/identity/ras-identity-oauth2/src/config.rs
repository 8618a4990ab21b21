//! OAuth2 service configuration types.

use serde::{Deserialize, Serialize};

/// Consumer credentials registered with the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    /// Redirect URI the provider sends the user back to
    pub callback_url: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            callback_url: callback_url.into(),
        }
    }
}

/// Configuration for a single OAuth2 service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub credentials: Credentials,
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Overrides the provider's default base URI
    #[serde(default)]
    pub base_api_uri: Option<String>,
    /// Whether to use PKCE (recommended for public clients)
    #[serde(default)]
    pub use_pkce: bool,
    #[serde(default = "default_state_ttl")]
    pub state_ttl_seconds: u64,
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_state_ttl() -> u64 {
    600 // 10 minutes
}

fn default_http_timeout() -> u64 {
    30
}

impl ServiceConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            scopes: Vec::new(),
            base_api_uri: None,
            use_pkce: false,
            state_ttl_seconds: default_state_ttl(),
            http_timeout_seconds: default_http_timeout(),
        }
    }

    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_base_api_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_api_uri = Some(uri.into());
        self
    }

    pub fn with_pkce(mut self, enabled: bool) -> Self {
        self.use_pkce = enabled;
        self
    }

    pub fn with_state_ttl(mut self, seconds: u64) -> Self {
        self.state_ttl_seconds = seconds;
        self
    }

    pub fn with_http_timeout(mut self, seconds: u64) -> Self {
        self.http_timeout_seconds = seconds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_from_json() {
        let json = r#"{
            "credentials": {
                "client_id": "id",
                "client_secret": "secret",
                "callback_url": "http://localhost:3000/callback"
            }
        }"#;

        let config: ServiceConfig = serde_json::from_str(json).unwrap();
        assert!(config.scopes.is_empty());
        assert!(config.base_api_uri.is_none());
        assert!(!config.use_pkce);
        assert_eq!(config.state_ttl_seconds, 600);
        assert_eq!(config.http_timeout_seconds, 30);
    }

    #[test]
    fn test_config_builder() {
        let config = ServiceConfig::new(Credentials::new("id", "secret", "http://cb"))
            .with_scopes(["a", "b"])
            .with_base_api_uri("https://example.com")
            .with_pkce(true)
            .with_state_ttl(60)
            .with_http_timeout(5);

        assert_eq!(config.scopes, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(config.base_api_uri.as_deref(), Some("https://example.com"));
        assert!(config.use_pkce);
        assert_eq!(config.state_ttl_seconds, 60);
        assert_eq!(config.http_timeout_seconds, 5);
    }
}
