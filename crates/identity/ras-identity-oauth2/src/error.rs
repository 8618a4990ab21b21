//! OAuth2 error types.

use thiserror::Error;

pub type OAuth2Result<T> = Result<T, OAuth2Error>;

#[derive(Debug, Error)]
pub enum OAuth2Error {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Scope '{0}' is not valid for this service")]
    InvalidScope(String),

    #[error("Invalid state parameter")]
    InvalidState,

    #[error("State not found or expired")]
    StateNotFound,

    #[error("Token exchange failed: {0}")]
    TokenExchangeFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    /// The token endpoint answered with something that is not a token object.
    #[error("Invalid token response: {0}")]
    InvalidTokenResponse(String),

    /// The provider reported an `error` or `error_description` in its token response.
    #[error("Error in retrieving token: \"{0}\"")]
    ProviderError(String),

    #[error("Callback error: {0}")]
    CallbackError(String),

    #[error("No access token stored for service '{0}'")]
    TokenNotFound(String),

    #[error("Access token has expired")]
    ExpiredToken,

    #[error("Token has no refresh token")]
    MissingRefreshToken,

    #[error("API request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },
}
