//! Token endpoint payloads.

use serde::{Deserialize, Serialize};

/// Token response from the token endpoint.
///
/// Only `access_token` is required; the remaining fields are optional so an
/// unexpected payload fails fast on the one field every caller needs.
/// Ownership passes entirely to the caller; this crate does not retain
/// tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for API requests.
    pub access_token: String,
    /// Token used to obtain a new access token once this one expires.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Token type, `"Bearer"` for Spotify.
    #[serde(default)]
    pub token_type: Option<String>,
    /// Access-token lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Space-separated scopes actually granted.
    #[serde(default)]
    pub scope: Option<String>,
}

/// Error payload from the token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenErrorResponse {
    /// OAuth error code, e.g. `invalid_grant`.
    pub error: String,
    /// Human-readable detail.
    #[serde(default)]
    pub error_description: Option<String>,
}

impl TokenErrorResponse {
    /// The most descriptive message available.
    pub fn into_description(self) -> String {
        self.error_description.unwrap_or(self.error)
    }
}
