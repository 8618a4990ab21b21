//! EVE Online SSO provider.

use crate::scopes;
use ras_identity_oauth2::{
    AuthorizationMethod, OAuth2Error, OAuth2Result, OAuth2Service, OAuth2Token, ServiceConfig,
    ServiceProvider, TokenStorage, endpoint,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// The EVE Online single sign-on service.
///
/// Tokens are sent as `Authorization: Bearer` headers. Only the scopes in
/// [`scopes::ALL`] are accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct EveOnline;

impl EveOnline {
    pub const SERVICE_NAME: &'static str = "EveOnline";
    pub const DEFAULT_BASE_URI: &'static str = "https://login.eveonline.com";

    /// Build a service for this provider. `config.base_api_uri` overrides
    /// [`Self::DEFAULT_BASE_URI`], e.g. to target the test server.
    pub fn service(
        config: ServiceConfig,
        storage: Arc<dyn TokenStorage>,
    ) -> OAuth2Result<OAuth2Service<EveOnline>> {
        OAuth2Service::new(EveOnline, config, storage)
    }
}

impl ServiceProvider for EveOnline {
    fn service_name(&self) -> &str {
        Self::SERVICE_NAME
    }

    fn default_base_uri(&self) -> Option<&str> {
        Some(Self::DEFAULT_BASE_URI)
    }

    fn authorization_endpoint(&self, base_api_uri: &Url) -> OAuth2Result<Url> {
        endpoint(base_api_uri, "/oauth/authorize")
    }

    fn access_token_endpoint(&self, base_api_uri: &Url) -> OAuth2Result<Url> {
        endpoint(base_api_uri, "/oauth/token")
    }

    fn parse_access_token_response(&self, response_body: &str) -> OAuth2Result<OAuth2Token> {
        let mut data = match serde_json::from_str::<Value>(response_body) {
            Ok(Value::Object(data)) => data,
            _ => return Err(unparseable("Unable to parse response.")),
        };

        // error_description is more useful than the bare error code
        if let Some(message) =
            reported_error(&data, "error_description").or_else(|| reported_error(&data, "error"))
        {
            warn!("EVE Online SSO rejected the token request: {}", message);
            return Err(OAuth2Error::ProviderError(message));
        }

        let access_token = match data.remove("access_token") {
            Some(Value::String(token)) => token,
            _ => return Err(unparseable("missing access_token")),
        };

        let lifetime = data
            .remove("expires_in")
            .as_ref()
            .and_then(lifetime_seconds)
            .ok_or_else(|| unparseable("missing or invalid expires_in"))?;

        let mut token = OAuth2Token::new(access_token).with_lifetime(lifetime);

        match data.remove("refresh_token") {
            Some(Value::String(refresh_token)) => {
                token = token.with_refresh_token(refresh_token);
            }
            None | Some(Value::Null) => {}
            Some(_) => return Err(unparseable("refresh_token is not a string")),
        }

        debug!(
            "Parsed EVE Online token with {} extra parameters",
            data.len()
        );

        Ok(token.with_extra_params(data))
    }

    fn authorization_method(&self) -> AuthorizationMethod {
        AuthorizationMethod::HeaderBearer
    }

    fn valid_scopes(&self) -> Option<&[&str]> {
        Some(scopes::ALL)
    }
}

fn unparseable(message: &str) -> OAuth2Error {
    OAuth2Error::InvalidTokenResponse(message.to_string())
}

/// Non-null value of an error field, as text
fn reported_error(data: &Map<String, Value>, field: &str) -> Option<String> {
    match data.get(field)? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn lifetime_seconds(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ras_identity_oauth2::{Credentials, EndOfLife, InMemoryTokenStorage};

    fn parse(body: &str) -> OAuth2Result<OAuth2Token> {
        EveOnline.parse_access_token_response(body)
    }

    #[test]
    fn test_parse_minimal_token() {
        let token = parse(r#"{"access_token":"abc","expires_in":3600}"#).unwrap();

        assert_eq!(token.access_token, "abc");
        assert_eq!(token.lifetime, Some(3600));
        assert!(matches!(token.end_of_life, EndOfLife::At(_)));
        assert!(token.refresh_token.is_none());
        assert!(token.extra_params.is_empty());
    }

    #[test]
    fn test_parse_refresh_token_and_extras() {
        let token =
            parse(r#"{"access_token":"abc","expires_in":3600,"refresh_token":"r1","scope":"x"}"#)
                .unwrap();

        assert_eq!(token.refresh_token.as_deref(), Some("r1"));
        assert_eq!(
            serde_json::Value::Object(token.extra_params),
            serde_json::json!({"scope": "x"})
        );
    }

    #[test]
    fn test_parse_keeps_token_type_as_extra() {
        let token = parse(
            r#"{"access_token":"abc","token_type":"Bearer","expires_in":1200,"refresh_token":null}"#,
        )
        .unwrap();

        assert!(token.refresh_token.is_none());
        assert_eq!(token.extra_params.get("token_type").unwrap(), "Bearer");
        assert_eq!(token.extra_params.len(), 1);
    }

    #[test]
    fn test_parse_numeric_string_lifetime() {
        let token = parse(r#"{"access_token":"abc","expires_in":"300"}"#).unwrap();
        assert_eq!(token.lifetime, Some(300));

        let token = parse(r#"{"access_token":"abc","expires_in":3600.0}"#).unwrap();
        assert_eq!(token.lifetime, Some(3600));

        assert!(matches!(
            parse(r#"{"access_token":"abc","expires_in":3600.5}"#),
            Err(OAuth2Error::InvalidTokenResponse(_))
        ));
    }

    #[test]
    fn test_parse_provider_error() {
        let result = parse(r#"{"error":"invalid_grant"}"#);

        match result {
            Err(OAuth2Error::ProviderError(message)) => {
                assert!(message.contains("invalid_grant"));
            }
            other => panic!("Expected ProviderError, got {:?}", other),
        }
    }

    #[test]
    fn test_error_description_takes_precedence() {
        let result = parse(
            r#"{"error":"invalid_request","error_description":"Authorization code not found"}"#,
        );

        let err = result.unwrap_err();
        assert!(matches!(&err, OAuth2Error::ProviderError(m) if m == "Authorization code not found"));
        assert_eq!(
            err.to_string(),
            "Error in retrieving token: \"Authorization code not found\""
        );
    }

    #[test]
    fn test_null_error_field_is_ignored() {
        let token = parse(r#"{"access_token":"abc","expires_in":60,"error":null}"#).unwrap();
        assert_eq!(token.access_token, "abc");
        assert!(token.extra_params.contains_key("error"));
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(matches!(
            parse("<html>Service Unavailable</html>"),
            Err(OAuth2Error::InvalidTokenResponse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_object_json() {
        assert!(matches!(parse("[1, 2, 3]"), Err(OAuth2Error::InvalidTokenResponse(_))));
        assert!(matches!(parse("\"abc\""), Err(OAuth2Error::InvalidTokenResponse(_))));
        assert!(matches!(parse("null"), Err(OAuth2Error::InvalidTokenResponse(_))));
    }

    #[test]
    fn test_parse_rejects_missing_required_fields() {
        assert!(matches!(
            parse(r#"{"expires_in":3600}"#),
            Err(OAuth2Error::InvalidTokenResponse(_))
        ));
        assert!(matches!(
            parse(r#"{"access_token":"abc"}"#),
            Err(OAuth2Error::InvalidTokenResponse(_))
        ));
        assert!(matches!(
            parse(r#"{"access_token":"abc","expires_in":-5}"#),
            Err(OAuth2Error::InvalidTokenResponse(_))
        ));
    }

    #[test]
    fn test_endpoints() {
        let base = Url::parse("https://login.eveonline.com").unwrap();

        assert_eq!(
            EveOnline.authorization_endpoint(&base).unwrap().as_str(),
            "https://login.eveonline.com/oauth/authorize"
        );
        assert_eq!(
            EveOnline.access_token_endpoint(&base).unwrap().as_str(),
            "https://login.eveonline.com/oauth/token"
        );
    }

    #[test]
    fn test_bearer_authorization() {
        assert_eq!(
            EveOnline.authorization_method(),
            AuthorizationMethod::HeaderBearer
        );
    }

    #[test]
    fn test_service_defaults_and_override() {
        let credentials = Credentials::new("id", "secret", "http://localhost:3000/callback");

        let service = EveOnline::service(
            ServiceConfig::new(credentials.clone()),
            Arc::new(InMemoryTokenStorage::new()),
        )
        .unwrap();
        assert_eq!(
            service.authorization_endpoint().unwrap().as_str(),
            "https://login.eveonline.com/oauth/authorize"
        );

        let service = EveOnline::service(
            ServiceConfig::new(credentials).with_base_api_uri("https://sisilogin.testeveonline.com"),
            Arc::new(InMemoryTokenStorage::new()),
        )
        .unwrap();
        assert_eq!(
            service.access_token_endpoint().unwrap().as_str(),
            "https://sisilogin.testeveonline.com/oauth/token"
        );
    }

    #[test]
    fn test_unknown_scope_rejected() {
        let config = ServiceConfig::new(Credentials::new("id", "secret", "http://cb"))
            .with_scopes([scopes::PUBLIC_DATA, "esi-skills.read_skills.v1"]);

        let result = EveOnline::service(config, Arc::new(InMemoryTokenStorage::new()));
        assert!(
            matches!(result, Err(OAuth2Error::InvalidScope(scope)) if scope == "esi-skills.read_skills.v1")
        );
    }
}
