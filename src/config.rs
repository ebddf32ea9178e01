//! Authenticator configuration.

use crate::error::AuthError;

/// Default authorization endpoint.
pub const AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";

/// Default token endpoint.
pub const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Configuration for the PKCE authenticator.
///
/// The client ID and redirect URIs come from the application's secret store;
/// the endpoint URLs default to the Spotify accounts service and exist mainly
/// so tests can point the flow at a local server.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// OAuth client ID.
    pub client_id: String,
    /// Redirect URI registered for local development.
    pub redirect_uri_dev: String,
    /// Redirect URI registered for production.
    pub redirect_uri_prod: String,
    /// Authorization endpoint URL.
    pub authorize_url: String,
    /// Token endpoint URL.
    pub token_url: String,
}

impl AuthConfig {
    /// Create a configuration with the default Spotify endpoints.
    pub fn new(
        client_id: impl Into<String>,
        redirect_uri_dev: impl Into<String>,
        redirect_uri_prod: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            redirect_uri_dev: redirect_uri_dev.into(),
            redirect_uri_prod: redirect_uri_prod.into(),
            authorize_url: AUTHORIZE_URL.to_string(),
            token_url: TOKEN_URL.to_string(),
        }
    }

    /// Override the authorization endpoint.
    #[must_use]
    pub fn with_authorize_url(mut self, url: impl Into<String>) -> Self {
        self.authorize_url = url.into();
        self
    }

    /// Override the token endpoint.
    #[must_use]
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Looks for:
    /// - `SPOTIFY_CLIENT_ID`
    /// - `SPOTIFY_REDIRECT_URI_DEV`
    /// - `SPOTIFY_REDIRECT_URI_PROD`
    pub fn from_env() -> Result<Self, AuthError> {
        let client_id = std::env::var("SPOTIFY_CLIENT_ID")
            .map_err(|_| AuthError::MissingConfig("SPOTIFY_CLIENT_ID"))?;
        let dev = std::env::var("SPOTIFY_REDIRECT_URI_DEV")
            .map_err(|_| AuthError::MissingConfig("SPOTIFY_REDIRECT_URI_DEV"))?;
        let prod = std::env::var("SPOTIFY_REDIRECT_URI_PROD")
            .map_err(|_| AuthError::MissingConfig("SPOTIFY_REDIRECT_URI_PROD"))?;
        Ok(Self::new(client_id, dev, prod))
    }

    /// Resolve the redirect URI for the given origin.
    ///
    /// Pure function of its input: loopback origins (`localhost`,
    /// `127.0.0.1`) get the development URI, everything else the production
    /// one.
    pub fn redirect_uri(&self, origin: &str) -> &str {
        if origin.contains("localhost") || origin.contains("127.0.0.1") {
            &self.redirect_uri_dev
        } else {
            &self.redirect_uri_prod
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config() -> AuthConfig {
        AuthConfig::new(
            "client-123",
            "http://localhost:3000/callback",
            "https://app.example.com/callback",
        )
    }

    #[test]
    fn test_default_endpoints() {
        let config = config();
        assert_eq!(config.authorize_url, AUTHORIZE_URL);
        assert_eq!(config.token_url, TOKEN_URL);
    }

    #[test]
    fn test_endpoint_overrides() {
        let config = config()
            .with_authorize_url("http://127.0.0.1:9000/authorize")
            .with_token_url("http://127.0.0.1:9000/token");
        assert_eq!(config.authorize_url, "http://127.0.0.1:9000/authorize");
        assert_eq!(config.token_url, "http://127.0.0.1:9000/token");
    }

    #[rstest]
    #[case("http://localhost:5173", true)]
    #[case("http://127.0.0.1:8080", true)]
    #[case("https://app.example.com", false)]
    #[case("https://music.example.org", false)]
    fn test_redirect_uri_resolution(#[case] origin: &str, #[case] dev: bool) {
        let config = config();
        let expected = if dev {
            "http://localhost:3000/callback"
        } else {
            "https://app.example.com/callback"
        };
        assert_eq!(config.redirect_uri(origin), expected);
    }

    #[test]
    fn test_from_env() {
        // Missing and present cases share the same variables, so both phases
        // run inside one test to keep them ordered.
        std::env::remove_var("SPOTIFY_CLIENT_ID");
        std::env::remove_var("SPOTIFY_REDIRECT_URI_DEV");
        std::env::remove_var("SPOTIFY_REDIRECT_URI_PROD");

        let missing = AuthConfig::from_env();
        assert!(matches!(
            missing,
            Err(AuthError::MissingConfig("SPOTIFY_CLIENT_ID"))
        ));

        std::env::set_var("SPOTIFY_CLIENT_ID", "client-env");
        std::env::set_var("SPOTIFY_REDIRECT_URI_DEV", "http://localhost:3000/cb");
        std::env::set_var("SPOTIFY_REDIRECT_URI_PROD", "https://example.com/cb");

        let config = AuthConfig::from_env().unwrap();
        assert_eq!(config.client_id, "client-env");
        assert_eq!(config.redirect_uri_dev, "http://localhost:3000/cb");
        assert_eq!(config.redirect_uri_prod, "https://example.com/cb");

        std::env::remove_var("SPOTIFY_CLIENT_ID");
        std::env::remove_var("SPOTIFY_REDIRECT_URI_DEV");
        std::env::remove_var("SPOTIFY_REDIRECT_URI_PROD");
    }
}
