use std::sync::Arc;

use axum::extract::FromRef;

use super::traits::Authenticator;
use crate::session::{SessionIssuer, SessionVerifier};

/// Shared state for auth route handlers.
pub(super) struct AuthState<A> {
    pub(super) authenticator: Arc<A>,
    pub(super) issuer: SessionIssuer,
    pub(super) verifier: SessionVerifier,
}

// Manual Clone: avoid derive adding an `A: Clone` bound.
impl<A> Clone for AuthState<A> {
    fn clone(&self) -> Self {
        Self {
            authenticator: self.authenticator.clone(),
            issuer: self.issuer.clone(),
            verifier: self.verifier.clone(),
        }
    }
}

// AuthSession pulls the verifier out of whatever state the router carries.
impl<A: Authenticator> FromRef<AuthState<A>> for SessionVerifier {
    fn from_ref(state: &AuthState<A>) -> Self {
        state.verifier.clone()
    }
}
