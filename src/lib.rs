//! # spotify-pkce
//!
//! Client-side OAuth 2.0 Authorization Code flow with PKCE for Spotify.
//!
//! This crate implements the public-client side of the handshake: it
//! generates and stores the code verifier, derives the S256 code challenge,
//! builds the authorization URL, and exchanges authorization codes and
//! refresh tokens at the token endpoint. No client secret is involved
//! anywhere.
//!
//! ## Core Concepts
//!
//! - **[`AuthConfig`]**: Client ID, redirect URIs, and endpoint URLs
//! - **[`PkceAuthenticator`]**: Drives the flow against one origin
//! - **[`SessionStore`]**: Where the code verifier lives between redirects
//! - **[`TokenResponse`]**: The provider's token payload
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use spotify_pkce::{AuthConfig, MemorySessionStore, PkceAuthenticator};
//!
//! let config = AuthConfig::from_env()?;
//! let store = Arc::new(MemorySessionStore::new());
//! let auth = PkceAuthenticator::new(config, "http://localhost:3000", store);
//!
//! // Send the user here to approve access.
//! let url = auth.authorize_url(&["user-read-private", "user-read-email"]);
//!
//! // Back from the redirect with ?code=...
//! let tokens = auth.exchange_code(&code).await?;
//!
//! // Later, when the access token expires.
//! let tokens = auth.refresh_token(tokens.refresh_token.as_deref().unwrap()).await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod flow;
pub mod pkce;
pub mod session;
pub mod token;

// Re-exports
pub use config::{AuthConfig, AUTHORIZE_URL, TOKEN_URL};
pub use error::{AuthError, AuthResult};
pub use flow::PkceAuthenticator;
pub use session::{MemorySessionStore, SessionStore, VERIFIER_KEY};
pub use token::TokenResponse;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        AuthConfig, AuthError, AuthResult, MemorySessionStore, PkceAuthenticator, SessionStore,
        TokenResponse,
    };
}
