//! Character lookup through the SSO verify endpoint.

use crate::provider::EveOnline;
use ras_identity_oauth2::{Method, OAuth2Result, OAuth2Service};
use serde::{Deserialize, Serialize};
use tracing::info;

const VERIFY_PATH: &str = "/oauth/verify";

/// Character the stored access token was issued for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CharacterInfo {
    #[serde(rename = "CharacterID")]
    pub character_id: u64,
    pub character_name: String,
    pub expires_on: String,
    /// Space-delimited granted scopes
    #[serde(default)]
    pub scopes: String,
    pub token_type: String,
    pub character_owner_hash: String,
    #[serde(default)]
    pub intellectual_property: Option<String>,
}

impl CharacterInfo {
    pub fn granted_scopes(&self) -> impl Iterator<Item = &str> {
        self.scopes.split_whitespace()
    }
}

/// Resolve the character behind the service's stored token
pub async fn verify_character(service: &OAuth2Service<EveOnline>) -> OAuth2Result<CharacterInfo> {
    let body = service.request(VERIFY_PATH, Method::GET, None).await?;
    let character: CharacterInfo = serde_json::from_str(&body)?;

    info!(
        "Verified EVE Online character {} ({})",
        character.character_name, character.character_id
    );
    Ok(character)
}
