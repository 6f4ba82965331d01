use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Authentication errors for the middleware layer.
///
/// Every variant that reaches a user means "not logged in"; the distinct
/// messages only change what the login page can tell them.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No valid session found.
    #[error("Not authenticated")]
    Unauthenticated,

    /// Session token was valid but has expired.
    #[error("Session expired")]
    SessionExpired,

    /// Login attempt with unknown email or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The consumer's [`Authenticator`](super::Authenticator) failed.
    #[error("Authenticator error: {0}")]
    Authenticator(String),

    /// Session could not be issued.
    #[error(transparent)]
    Session(#[from] crate::error::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated | Self::SessionExpired | Self::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
            }
            Self::Authenticator(_) | Self::Session(_) => {
                tracing::error!(error = %self, "Auth internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}
