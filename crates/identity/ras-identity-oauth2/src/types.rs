//! OAuth2 protocol types.

use serde::{Deserialize, Serialize};

/// Query parameters the provider redirects back with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationResponse {
    #[serde(default)]
    pub code: String,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}
