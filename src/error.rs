//! Authentication flow errors.

use thiserror::Error;

/// Errors that can occur during the PKCE authorization flow.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Code exchange attempted with no verifier in the session store.
    ///
    /// The session was lost or the flow was never started; the caller must
    /// restart from authorization-URL construction.
    #[error("Code verifier not found in session storage")]
    MissingVerifier,

    /// Non-success response from the token endpoint.
    #[error("Token exchange failed with HTTP {status}: {description}")]
    TokenExchange {
        /// HTTP status code.
        status: u16,
        /// Provider's `error_description` when the body was parseable.
        description: String,
    },

    /// Missing configuration value.
    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),

    /// Transport failure, or a success body that was not valid token JSON.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::TokenExchange {
            status: 400,
            description: "bad code".to_string(),
        };
        assert!(err.to_string().contains("HTTP 400"));
        assert!(err.to_string().contains("bad code"));
    }

    #[test]
    fn test_missing_verifier_display() {
        let err = AuthError::MissingVerifier;
        assert!(err.to_string().contains("session storage"));
    }
}
