//! Generic OAuth2 service framework.
//!
//! This crate implements the Authorization Code flow (with optional PKCE), token
//! refresh and authorized API requests once, and lets each identity provider plug
//! in through the [`ServiceProvider`] trait: endpoints, token-response parsing,
//! scope validation and how the access token is attached to requests.

mod config;
mod error;
mod provider;
mod service;
mod storage;
mod token;
mod types;


pub use config::{Credentials, ServiceConfig};
pub use error::{OAuth2Error, OAuth2Result};
pub use provider::{AuthorizationMethod, ServiceProvider, endpoint};
pub use service::{OAuth2Service, PkceChallenge};
pub use storage::{AuthorizationState, InMemoryTokenStorage, TokenStorage};
pub use token::{EndOfLife, OAuth2Token};
pub use types::AuthorizationResponse;

// Re-export so callers can build requests without depending on reqwest directly
pub use reqwest::Method;
