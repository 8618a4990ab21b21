//! OAuth2 token value object.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// When a token stops being usable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "at", rename_all = "snake_case")]
pub enum EndOfLife {
    /// The provider did not say
    Unknown,
    NeverExpires,
    At(DateTime<Utc>),
}

/// Access token issued by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuth2Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Lifetime in seconds as reported by the provider
    pub lifetime: Option<u64>,
    pub end_of_life: EndOfLife,
    /// Every response field the token does not model itself
    #[serde(default)]
    pub extra_params: serde_json::Map<String, serde_json::Value>,
}

impl OAuth2Token {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            lifetime: None,
            end_of_life: EndOfLife::Unknown,
            extra_params: serde_json::Map::new(),
        }
    }

    /// Sets the lifetime relative to now. A lifetime of zero never expires.
    pub fn with_lifetime(mut self, seconds: u64) -> Self {
        self.lifetime = Some(seconds);
        self.end_of_life = if seconds == 0 {
            EndOfLife::NeverExpires
        } else {
            let seconds = i64::try_from(seconds).unwrap_or(i64::MAX);
            Duration::try_seconds(seconds)
                .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
                .map_or(EndOfLife::NeverExpires, EndOfLife::At)
        };
        self
    }

    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    pub fn with_extra_params(mut self, params: serde_json::Map<String, serde_json::Value>) -> Self {
        self.extra_params = params;
        self
    }

    pub fn is_expired(&self) -> bool {
        match self.end_of_life {
            EndOfLife::At(at) => Utc::now() > at,
            EndOfLife::Unknown | EndOfLife::NeverExpires => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_sets_end_of_life() {
        let token = OAuth2Token::new("abc").with_lifetime(3600);
        assert_eq!(token.lifetime, Some(3600));
        match token.end_of_life {
            EndOfLife::At(at) => {
                let remaining = at - Utc::now();
                assert!(remaining > Duration::seconds(3590));
                assert!(remaining <= Duration::seconds(3600));
            }
            other => panic!("Expected EndOfLife::At, got {:?}", other),
        }
        assert!(!token.is_expired());
    }

    #[test]
    fn test_zero_lifetime_never_expires() {
        let token = OAuth2Token::new("abc").with_lifetime(0);
        assert_eq!(token.end_of_life, EndOfLife::NeverExpires);
        assert!(!token.is_expired());
    }

    #[test]
    fn test_unknown_lifetime() {
        let token = OAuth2Token::new("abc");
        assert_eq!(token.end_of_life, EndOfLife::Unknown);
        assert!(token.lifetime.is_none());
        assert!(!token.is_expired());
    }

    #[test]
    fn test_past_end_of_life_is_expired() {
        let mut token = OAuth2Token::new("abc").with_lifetime(60);
        token.end_of_life = EndOfLife::At(Utc::now() - Duration::minutes(1));
        assert!(token.is_expired());
    }
}
