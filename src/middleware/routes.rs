use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use super::error::AuthError;
use super::extractor::AuthSession;
use super::state::AuthState;
use super::traits::Authenticator;
use crate::session::SessionConfig;
use crate::types::Identity;

/// Path prefix of the session routes.
pub const AUTH_PATH: &str = "/api/auth";

/// Create the session router.
///
/// - `POST {AUTH_PATH}/login`: JSON `{email, password}`, sets the session cookie
/// - `POST {AUTH_PATH}/logout`: clears the session cookie
/// - `GET {AUTH_PATH}/session`: the current identity, or `401`
pub fn session_routes<A: Authenticator>(config: &SessionConfig, authenticator: A) -> Router {
    let state = AuthState {
        authenticator: Arc::new(authenticator),
        issuer: config.issuer(),
        verifier: config.verifier(),
    };

    Router::new()
        .route(&format!("{AUTH_PATH}/login"), post(login::<A>))
        .route(&format!("{AUTH_PATH}/logout"), post(logout::<A>))
        .route(&format!("{AUTH_PATH}/session"), get(current_session))
        .with_state(state)
}

// ── Login ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

async fn login<A: Authenticator>(
    State(state): State<AuthState<A>>,
    mut jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Identity>), AuthError> {
    let identity = state
        .authenticator
        .authenticate(&body.email, &body.password)
        .await
        .map_err(|e| AuthError::Authenticator(e.to_string()))?
        .ok_or_else(|| {
            tracing::info!("Login rejected: invalid credentials");
            AuthError::InvalidCredentials
        })?;

    state
        .issuer
        .create_session(&mut jar, identity.user_id.clone(), identity.email.clone())?;

    tracing::info!(user_id = %identity.user_id, "Login successful");

    Ok((jar, Json(identity)))
}

// ── Logout ─────────────────────────────────────────────────────────

async fn logout<A: Authenticator>(
    State(state): State<AuthState<A>>,
    mut jar: CookieJar,
) -> (CookieJar, StatusCode) {
    state.issuer.clear_session(&mut jar);
    (jar, StatusCode::NO_CONTENT)
}

// ── Session ────────────────────────────────────────────────────────

async fn current_session(AuthSession(identity): AuthSession) -> Json<Identity> {
    Json(identity)
}
