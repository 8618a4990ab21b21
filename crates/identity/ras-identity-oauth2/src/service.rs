//! Generic OAuth2 service with PKCE support.

use crate::config::{Credentials, ServiceConfig};
use crate::error::{OAuth2Error, OAuth2Result};
use crate::provider::ServiceProvider;
use crate::storage::{AuthorizationState, TokenStorage, expiry_after};
use crate::token::OAuth2Token;
use crate::types::AuthorizationResponse;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use rand::{Rng, thread_rng};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use url::Url;

/// PKCE code challenge and verifier
#[derive(Debug, Clone)]
pub struct PkceChallenge {
    pub code_verifier: String,
    pub code_challenge: String,
    pub code_challenge_method: String,
}

impl Default for PkceChallenge {
    fn default() -> Self {
        Self::new()
    }
}

impl PkceChallenge {
    /// Generate a new PKCE challenge
    pub fn new() -> Self {
        let code_verifier = Self::generate_code_verifier();
        let code_challenge = Self::generate_code_challenge(&code_verifier);

        Self {
            code_verifier,
            code_challenge,
            code_challenge_method: "S256".to_string(),
        }
    }

    fn generate_code_verifier() -> String {
        let mut rng = thread_rng();
        let bytes: Vec<u8> = (0..64).map(|_| rng.r#gen::<u8>()).collect();
        URL_SAFE_NO_PAD.encode(bytes)
    }

    pub(crate) fn generate_code_challenge(verifier: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(verifier.as_bytes());
        URL_SAFE_NO_PAD.encode(hasher.finalize())
    }
}

/// An OAuth2 service bound to one provider, one set of credentials and one token storage
#[derive(Clone)]
pub struct OAuth2Service<P: ServiceProvider> {
    provider: P,
    credentials: Credentials,
    http_client: Client,
    storage: Arc<dyn TokenStorage>,
    scopes: Vec<String>,
    base_api_uri: Url,
    use_pkce: bool,
    state_ttl_seconds: u64,
}

impl<P: ServiceProvider> OAuth2Service<P> {
    pub fn new(
        provider: P,
        config: ServiceConfig,
        storage: Arc<dyn TokenStorage>,
    ) -> OAuth2Result<Self> {
        if let Some(scope) = config.scopes.iter().find(|s| !provider.is_valid_scope(s)) {
            return Err(OAuth2Error::InvalidScope(scope.clone()));
        }

        if expiry_after(Utc::now(), config.state_ttl_seconds).is_none() {
            return Err(OAuth2Error::ConfigError(format!(
                "State TTL of {} seconds is out of range",
                config.state_ttl_seconds
            )));
        }

        let base_api_uri = match config.base_api_uri.as_deref() {
            Some(uri) => Url::parse(uri)?,
            None => {
                let uri = provider.default_base_uri().ok_or_else(|| {
                    OAuth2Error::ConfigError(format!(
                        "No base API URI configured for service '{}'",
                        provider.service_name()
                    ))
                })?;
                Url::parse(uri)?
            }
        };

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .build()
            .map_err(|e| OAuth2Error::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            provider,
            credentials: config.credentials,
            http_client,
            storage,
            scopes: config.scopes,
            base_api_uri,
            use_pkce: config.use_pkce,
            state_ttl_seconds: config.state_ttl_seconds,
        })
    }

    /// Replace the HTTP client, e.g. to share a connection pool
    pub fn with_http_client(mut self, http_client: Client) -> Self {
        self.http_client = http_client;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn base_api_uri(&self) -> &Url {
        &self.base_api_uri
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    pub fn storage(&self) -> &Arc<dyn TokenStorage> {
        &self.storage
    }

    pub fn authorization_endpoint(&self) -> OAuth2Result<Url> {
        self.provider.authorization_endpoint(&self.base_api_uri)
    }

    pub fn access_token_endpoint(&self) -> OAuth2Result<Url> {
        self.provider.access_token_endpoint(&self.base_api_uri)
    }

    /// Generate the authorization URL and the state parameter bound to it
    pub async fn authorization_uri(
        &self,
        additional_params: HashMap<String, String>,
    ) -> OAuth2Result<(Url, String)> {
        let mut url = self.authorization_endpoint()?;

        let pkce = self.use_pkce.then(PkceChallenge::new);

        let state = AuthorizationState::new(
            self.provider.service_name().to_string(),
            self.credentials.callback_url.clone(),
            pkce.as_ref().map(|p| p.code_verifier.clone()),
            self.state_ttl_seconds,
        )?;

        let state_param = state.state.clone();
        self.storage.store_authorization_state(state).await?;

        let mut params = url.query_pairs_mut();
        params.append_pair("response_type", "code");
        params.append_pair("client_id", &self.credentials.client_id);
        params.append_pair("redirect_uri", &self.credentials.callback_url);
        params.append_pair("state", &state_param);

        if !self.scopes.is_empty() {
            params.append_pair("scope", &self.scopes.join(self.provider.scopes_delimiter()));
        }

        if let Some(pkce) = &pkce {
            params.append_pair("code_challenge", &pkce.code_challenge);
            params.append_pair("code_challenge_method", &pkce.code_challenge_method);
        }

        for (key, value) in &additional_params {
            params.append_pair(key, value);
        }

        drop(params);

        debug!(
            "Generated authorization URL for service {}",
            self.provider.service_name()
        );

        Ok((url, state_param))
    }

    /// Handle the provider's redirect and exchange the code for a token.
    ///
    /// An error redirect still consumes its state. States that never come back
    /// stay in storage until [`TokenStorage::cleanup_expired`] runs.
    pub async fn handle_callback(
        &self,
        callback_response: AuthorizationResponse,
    ) -> OAuth2Result<OAuth2Token> {
        if let Some(error) = &callback_response.error {
            let error_desc = callback_response
                .error_description
                .as_deref()
                .unwrap_or("No description");
            if let Some(state) = callback_response.state.as_deref() {
                // The state is dead either way
                let _ = self.storage.take_authorization_state(state).await;
            }
            return Err(OAuth2Error::CallbackError(format!(
                "{}: {}",
                error, error_desc
            )));
        }

        self.request_access_token(&callback_response.code, callback_response.state.as_deref())
            .await
    }

    /// Exchange an authorization code for a token and store it
    pub async fn request_access_token(
        &self,
        code: &str,
        state: Option<&str>,
    ) -> OAuth2Result<OAuth2Token> {
        let code_verifier = match state {
            Some(state) => {
                let stored = self.storage.take_authorization_state(state).await?;
                if stored.service != self.provider.service_name() {
                    return Err(OAuth2Error::InvalidState);
                }
                stored.code_verifier
            }
            // The verifier is only reachable through the state
            None if self.use_pkce => return Err(OAuth2Error::InvalidState),
            None => None,
        };

        let mut params = vec![
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("redirect_uri", self.credentials.callback_url.as_str()),
        ];

        if let Some(verifier) = code_verifier.as_deref() {
            params.push(("code_verifier", verifier));
        }

        let token = self.post_token_request(&params).await?;
        self.storage
            .store_access_token(self.provider.service_name(), token.clone())
            .await?;

        info!(
            "Successfully exchanged code for tokens for service {}",
            self.provider.service_name()
        );
        Ok(token)
    }

    /// Refresh a token and store the result.
    ///
    /// When the provider does not rotate the refresh token, the previous one is kept.
    pub async fn refresh_access_token(&self, token: &OAuth2Token) -> OAuth2Result<OAuth2Token> {
        let refresh_token = token
            .refresh_token
            .as_deref()
            .ok_or(OAuth2Error::MissingRefreshToken)?;

        let scope = self.scopes.join(self.provider.scopes_delimiter());
        let mut params = vec![
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
        ];
        if !scope.is_empty() {
            params.push(("scope", scope.as_str()));
        }

        let mut refreshed = self.post_token_request(&params).await?;
        if refreshed.refresh_token.is_none() {
            refreshed.refresh_token = Some(refresh_token.to_string());
        }

        self.storage
            .store_access_token(self.provider.service_name(), refreshed.clone())
            .await?;

        info!(
            "Refreshed access token for service {}",
            self.provider.service_name()
        );
        Ok(refreshed)
    }

    async fn post_token_request(&self, params: &[(&str, &str)]) -> OAuth2Result<OAuth2Token> {
        let response = self
            .http_client
            .post(self.access_token_endpoint()?)
            .form(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // Providers report grant errors in the body, so parse it before looking at the status
        let token = self
            .provider
            .parse_access_token_response(&body)
            .inspect_err(|e| error!("Token request failed: {}", e))?;

        if !status.is_success() {
            error!("Token endpoint returned {} with a token body", status);
            return Err(OAuth2Error::TokenExchangeFailed(format!(
                "unexpected status {}",
                status
            )));
        }

        Ok(token)
    }

    /// Resolve a request path against the base API URI. Absolute URLs pass through.
    pub fn resolve_request_uri(&self, path: &str) -> OAuth2Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(Url::parse(path)?);
        }
        crate::provider::endpoint(&self.base_api_uri, path)
    }

    /// Send an authorized API request using the stored token and return the response body
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<&[(&str, &str)]>,
    ) -> OAuth2Result<String> {
        let token = self
            .storage
            .retrieve_access_token(self.provider.service_name())
            .await?;

        if token.is_expired() {
            warn!(
                "Stored token for service {} has expired",
                self.provider.service_name()
            );
            return Err(OAuth2Error::ExpiredToken);
        }

        let authorization_method = self.provider.authorization_method();
        let mut uri = self.resolve_request_uri(path)?;
        if let Some(param) = authorization_method.query_parameter() {
            uri.query_pairs_mut().append_pair(param, &token.access_token);
        }

        let mut request = self.http_client.request(method, uri);
        if let Some(scheme) = authorization_method.header_scheme() {
            request = request.header(AUTHORIZATION, format!("{} {}", scheme, token.access_token));
        }
        if let Some(body) = body {
            request = request.form(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!("API request to {} failed: {}", path, text);
            return Err(OAuth2Error::RequestFailed {
                status: status.as_u16(),
                body: text,
            });
        }

        debug!("API request to {} succeeded", path);
        Ok(text)
    }
}
