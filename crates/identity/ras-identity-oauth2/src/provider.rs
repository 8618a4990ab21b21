//! Provider contract implemented by each OAuth2 service.

use crate::error::OAuth2Result;
use crate::token::OAuth2Token;
use url::Url;

/// How an access token is attached to API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationMethod {
    /// `Authorization: OAuth <token>`
    HeaderOAuth,
    /// `Authorization: Bearer <token>`
    HeaderBearer,
    /// `?access_token=<token>`
    QueryString,
    /// `?oauth2_access_token=<token>`
    QueryStringV2,
    /// `?apikey=<token>`
    QueryStringV3,
    /// `?auth=<token>`
    QueryStringV4,
}

impl AuthorizationMethod {
    /// Scheme used in the `Authorization` header, if this method uses one
    pub fn header_scheme(&self) -> Option<&'static str> {
        match self {
            Self::HeaderOAuth => Some("OAuth"),
            Self::HeaderBearer => Some("Bearer"),
            _ => None,
        }
    }

    /// Query parameter carrying the token, if this method uses one
    pub fn query_parameter(&self) -> Option<&'static str> {
        match self {
            Self::QueryString => Some("access_token"),
            Self::QueryStringV2 => Some("oauth2_access_token"),
            Self::QueryStringV3 => Some("apikey"),
            Self::QueryStringV4 => Some("auth"),
            Self::HeaderOAuth | Self::HeaderBearer => None,
        }
    }
}

/// Provider-specific part of an OAuth2 service.
///
/// Implementors supply endpoints and parse token responses; the generic
/// flow lives in [`OAuth2Service`](crate::OAuth2Service).
pub trait ServiceProvider: Send + Sync {
    /// Name used as the token storage key
    fn service_name(&self) -> &str;

    /// Base URI used when the configuration does not override it
    fn default_base_uri(&self) -> Option<&str> {
        None
    }

    fn authorization_endpoint(&self, base_api_uri: &Url) -> OAuth2Result<Url>;

    fn access_token_endpoint(&self, base_api_uri: &Url) -> OAuth2Result<Url>;

    /// Turns a raw token endpoint body into a token
    fn parse_access_token_response(&self, response_body: &str) -> OAuth2Result<OAuth2Token>;

    fn authorization_method(&self) -> AuthorizationMethod {
        AuthorizationMethod::HeaderOAuth
    }

    /// Scopes this provider accepts. `None` accepts any scope.
    fn valid_scopes(&self) -> Option<&[&str]> {
        None
    }

    fn is_valid_scope(&self, scope: &str) -> bool {
        self.valid_scopes()
            .is_none_or(|valid| valid.iter().any(|v| *v == scope))
    }

    fn scopes_delimiter(&self) -> &str {
        " "
    }
}

/// Appends `path` to `base`, producing `{base}/{path}`.
pub fn endpoint(base: &Url, path: &str) -> OAuth2Result<Url> {
    let base = base.as_str().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    Ok(Url::parse(&format!("{}/{}", base, path))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let base = Url::parse("https://example.com").unwrap();
        assert_eq!(
            endpoint(&base, "/oauth/token").unwrap().as_str(),
            "https://example.com/oauth/token"
        );

        let base = Url::parse("https://example.com/sso/").unwrap();
        assert_eq!(
            endpoint(&base, "oauth/token").unwrap().as_str(),
            "https://example.com/sso/oauth/token"
        );
    }

    #[test]
    fn test_authorization_method_placement() {
        assert_eq!(AuthorizationMethod::HeaderBearer.header_scheme(), Some("Bearer"));
        assert_eq!(AuthorizationMethod::HeaderBearer.query_parameter(), None);
        assert_eq!(AuthorizationMethod::HeaderOAuth.header_scheme(), Some("OAuth"));
        assert_eq!(AuthorizationMethod::QueryString.header_scheme(), None);
        assert_eq!(
            AuthorizationMethod::QueryStringV2.query_parameter(),
            Some("oauth2_access_token")
        );
        assert_eq!(AuthorizationMethod::QueryStringV3.query_parameter(), Some("apikey"));
        assert_eq!(AuthorizationMethod::QueryStringV4.query_parameter(), Some("auth"));
    }
}
