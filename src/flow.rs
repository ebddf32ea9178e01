//! The PKCE authorization flow.
//!
//! A [`PkceAuthenticator`] owns the configuration, the session store holding
//! the code verifier, and an HTTP client for the token endpoint. The verifier
//! lives in the store under [`VERIFIER_KEY`](crate::session::VERIFIER_KEY) so
//! that authorization-URL construction and the later code exchange agree on
//! the same secret.

use std::sync::Arc;

use tracing::{debug, error};

use crate::config::AuthConfig;
use crate::error::{AuthError, AuthResult};
use crate::pkce;
use crate::session::{SessionStore, VERIFIER_KEY};
use crate::token::{TokenErrorResponse, TokenResponse};

/// Drives the OAuth 2.0 Authorization Code flow with PKCE.
pub struct PkceAuthenticator {
    config: AuthConfig,
    origin: String,
    store: Arc<dyn SessionStore>,
    client: reqwest::Client,
}

impl PkceAuthenticator {
    /// Create an authenticator for the given origin.
    ///
    /// The origin decides which redirect URI is sent to the provider; it must
    /// match the page the user is redirected back to.
    pub fn new(
        config: AuthConfig,
        origin: impl Into<String>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            config,
            origin: origin.into(),
            store,
            client: reqwest::Client::new(),
        }
    }

    /// The redirect URI used for this authenticator's origin.
    pub fn redirect_uri(&self) -> &str {
        self.config.redirect_uri(&self.origin)
    }

    /// Return the stored code verifier, creating one if the slot is empty.
    ///
    /// Idempotent: repeated calls return the same value until the slot is
    /// cleared by a successful code exchange.
    pub fn code_verifier(&self) -> String {
        match self.store.get(VERIFIER_KEY) {
            Some(verifier) => verifier,
            None => {
                let verifier = pkce::random_string(pkce::VERIFIER_LENGTH);
                self.store.set(VERIFIER_KEY, verifier.clone());
                debug!(length = verifier.len(), "Generated new code verifier");
                verifier
            }
        }
    }

    /// Derive the code challenge from the current verifier.
    ///
    /// Always computed from whatever [`code_verifier`](Self::code_verifier)
    /// returns at call time, so a regenerated verifier yields a matching
    /// challenge.
    pub fn code_challenge(&self) -> String {
        pkce::code_challenge(&self.code_verifier())
    }

    /// Build the authorization URL the user agent should be sent to.
    ///
    /// `scopes` are joined with spaces into a single `scope` parameter.
    pub fn authorize_url(&self, scopes: &[&str]) -> String {
        let params = vec![
            ("client_id", self.config.client_id.clone()),
            ("response_type", "code".to_string()),
            ("redirect_uri", self.redirect_uri().to_string()),
            ("code_challenge_method", "S256".to_string()),
            ("code_challenge", self.code_challenge()),
            ("scope", scopes.join(" ")),
        ];

        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.authorize_url, query)
    }

    /// Exchange an authorization code for tokens.
    ///
    /// Fails with [`AuthError::MissingVerifier`] before any network traffic
    /// when the verifier slot is empty. On success the verifier is removed
    /// from the store; on failure it stays put so the exchange can be
    /// retried.
    pub async fn exchange_code(&self, code: &str) -> AuthResult<TokenResponse> {
        let verifier = self
            .store
            .get(VERIFIER_KEY)
            .ok_or(AuthError::MissingVerifier)?;

        debug!(url = %self.config.token_url, "Exchanging authorization code");

        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.redirect_uri()),
            ("code_verifier", verifier.as_str()),
        ];

        let response = self
            .client
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await?;

        let tokens = Self::parse_token_response(response).await?;

        // The slot is consumed only once the provider has accepted the code.
        self.store.remove(VERIFIER_KEY);

        Ok(tokens)
    }

    /// Exchange a refresh token for a fresh access token.
    ///
    /// Independent of the PKCE handshake: the verifier slot is neither read
    /// nor modified.
    pub async fn refresh_token(&self, refresh_token: &str) -> AuthResult<TokenResponse> {
        debug!(url = %self.config.token_url, "Refreshing access token");

        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ];

        let response = self
            .client
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await?;

        Self::parse_token_response(response).await
    }

    async fn parse_token_response(response: reqwest::Response) -> AuthResult<TokenResponse> {
        let status = response.status();

        if status.is_success() {
            debug!(status = %status, "Token request succeeded");
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            let description = serde_json::from_str::<TokenErrorResponse>(&body)
                .map(TokenErrorResponse::into_description)
                .unwrap_or_else(|_| {
                    "response body did not match the expected error shape".to_string()
                });
            error!(
                status = status.as_u16(),
                description = %description,
                "Token request rejected"
            );
            Err(AuthError::TokenExchange {
                status: status.as_u16(),
                description,
            })
        }
    }
}
