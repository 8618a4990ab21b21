//! EVE Online single sign-on provider.
//!
//! Plugs the EVE Online SSO into the generic `ras-identity-oauth2` service:
//! authorization and token endpoints under `{baseUri}/oauth/`, the published
//! permission scopes, token-response parsing and bearer authorization.
//!
//! ```no_run
//! use ras_identity_eveonline::{EveOnline, scopes};
//! use ras_identity_oauth2::{Credentials, InMemoryTokenStorage, ServiceConfig};
//! use std::sync::Arc;
//!
//! let config = ServiceConfig::new(Credentials::new(
//!     "client-id",
//!     "client-secret",
//!     "http://localhost:3000/callback",
//! ))
//! .with_scopes([scopes::PUBLIC_DATA, scopes::CHARACTER_SKILLS_READ]);
//!
//! let service = EveOnline::service(config, Arc::new(InMemoryTokenStorage::new()))?;
//! # Ok::<(), ras_identity_oauth2::OAuth2Error>(())
//! ```

mod provider;
pub mod scopes;
mod verify;


pub use provider::EveOnline;
pub use verify::{CharacterInfo, verify_character};
