use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use super::error::AuthError;
use crate::session::{SESSION_COOKIE_NAME, SessionStatus, SessionVerifier, VerifyError};
use crate::types::Identity;

/// Authenticated user extracted from the `auth-token` cookie.
///
/// Use as an Axum extractor in route handlers. Works with any router state
/// that can produce a [`SessionVerifier`] via `FromRef`. Rejects with
/// `401 Unauthorized`: "Session expired" for an expired token, "Not
/// authenticated" otherwise.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected(AuthSession(user): AuthSession) -> impl IntoResponse {
///     format!("Hello, {} ({})", user.email, user.user_id)
/// }
///
/// // Optional: accessible to both authenticated and anonymous users
/// async fn public(session: Option<AuthSession>) -> impl IntoResponse {
///     match session {
///         Some(AuthSession(user)) => format!("Hello, {}", user.email),
///         None => "Hello, guest".to_string(),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthSession(pub Identity);

impl<S> FromRequestParts<S> for AuthSession
where
    SessionVerifier: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let verifier = SessionVerifier::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);

        match resolve_session(&verifier, &jar) {
            SessionStatus::Authenticated(identity) => Ok(Self(identity)),
            SessionStatus::Rejected(VerifyError::Expired) => Err(AuthError::SessionExpired),
            SessionStatus::Rejected(VerifyError::Invalid(_)) | SessionStatus::Unauthenticated => {
                Err(AuthError::Unauthenticated)
            }
        }
    }
}

impl<S> OptionalFromRequestParts<S> for AuthSession
where
    SessionVerifier: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let verifier = SessionVerifier::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(resolve_session(&verifier, &jar).into_identity().map(Self))
    }
}

/// Verify the session cookie held in `jar`.
///
/// For middleware that needs the full outcome rather than the extractor's
/// accept/reject split.
#[must_use]
pub fn resolve_session(verifier: &SessionVerifier, jar: &CookieJar) -> SessionStatus {
    verifier.verify_session(jar.get(SESSION_COOKIE_NAME).map(|c| c.value()))
}
