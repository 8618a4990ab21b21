//! Token and authorization state storage.

use crate::error::{OAuth2Error, OAuth2Result};
use crate::token::OAuth2Token;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Point in time `ttl_seconds` after `start`, if representable
pub(crate) fn expiry_after(start: DateTime<Utc>, ttl_seconds: u64) -> Option<DateTime<Utc>> {
    i64::try_from(ttl_seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|ttl| start.checked_add_signed(ttl))
}

/// State stored between the authorization redirect and the callback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationState {
    pub state: String,
    pub service: String,
    pub redirect_uri: String,
    pub code_verifier: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthorizationState {
    pub fn new(
        service: String,
        redirect_uri: String,
        code_verifier: Option<String>,
        ttl_seconds: u64,
    ) -> OAuth2Result<Self> {
        let state = Uuid::new_v4().to_string();
        let created_at = Utc::now();
        let expires_at = expiry_after(created_at, ttl_seconds).ok_or_else(|| {
            OAuth2Error::ConfigError(format!(
                "State TTL of {} seconds is out of range",
                ttl_seconds
            ))
        })?;

        Ok(Self {
            state,
            service,
            redirect_uri,
            code_verifier,
            created_at,
            expires_at,
        })
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Storage for access tokens and pending authorization states, keyed by service name
#[async_trait]
pub trait TokenStorage: Send + Sync {
    async fn store_access_token(&self, service: &str, token: OAuth2Token) -> OAuth2Result<()>;

    async fn retrieve_access_token(&self, service: &str) -> OAuth2Result<OAuth2Token>;

    async fn has_access_token(&self, service: &str) -> bool;

    /// Removes the token for a service. Clearing a missing token is not an error.
    async fn clear_token(&self, service: &str) -> OAuth2Result<()>;

    async fn store_authorization_state(&self, state: AuthorizationState) -> OAuth2Result<()>;

    /// Retrieve and remove a state by its state parameter
    async fn take_authorization_state(&self, state: &str) -> OAuth2Result<AuthorizationState>;

    /// Clean up expired states
    async fn cleanup_expired(&self) -> OAuth2Result<usize>;
}

/// In-memory implementation of TokenStorage
pub struct InMemoryTokenStorage {
    tokens: Arc<RwLock<HashMap<String, OAuth2Token>>>,
    states: Arc<RwLock<HashMap<String, AuthorizationState>>>,
}

impl InMemoryTokenStorage {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            states: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryTokenStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStorage for InMemoryTokenStorage {
    async fn store_access_token(&self, service: &str, token: OAuth2Token) -> OAuth2Result<()> {
        let mut tokens = self.tokens.write().await;
        tokens.insert(service.to_string(), token);
        Ok(())
    }

    async fn retrieve_access_token(&self, service: &str) -> OAuth2Result<OAuth2Token> {
        let tokens = self.tokens.read().await;
        tokens
            .get(service)
            .cloned()
            .ok_or_else(|| OAuth2Error::TokenNotFound(service.to_string()))
    }

    async fn has_access_token(&self, service: &str) -> bool {
        self.tokens.read().await.contains_key(service)
    }

    async fn clear_token(&self, service: &str) -> OAuth2Result<()> {
        self.tokens.write().await.remove(service);
        Ok(())
    }

    async fn store_authorization_state(&self, state: AuthorizationState) -> OAuth2Result<()> {
        let mut states = self.states.write().await;
        states.insert(state.state.clone(), state);
        Ok(())
    }

    async fn take_authorization_state(&self, state: &str) -> OAuth2Result<AuthorizationState> {
        let mut states = self.states.write().await;

        let authorization_state = states.remove(state).ok_or(OAuth2Error::StateNotFound)?;

        if authorization_state.is_expired() {
            return Err(OAuth2Error::StateNotFound);
        }

        Ok(authorization_state)
    }

    async fn cleanup_expired(&self) -> OAuth2Result<usize> {
        let mut states = self.states.write().await;
        let before = states.len();
        let now = Utc::now();

        states.retain(|_, state| now <= state.expires_at);

        Ok(before - states.len())
    }
}
