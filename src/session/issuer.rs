use std::sync::Arc;

use time::OffsetDateTime;

use super::cookies;
use super::store::CookieStore;
use crate::error::Error;
use crate::token::{SessionClaims, SessionKeys};
use crate::types::{DeploymentMode, Identity, UserId};

/// Mints session tokens and writes them to the `auth-token` cookie.
#[derive(Debug, Clone)]
pub struct SessionIssuer {
    keys: Arc<SessionKeys>,
    mode: DeploymentMode,
}

impl SessionIssuer {
    #[must_use]
    pub fn new(keys: Arc<SessionKeys>, mode: DeploymentMode) -> Self {
        Self { keys, mode }
    }

    #[must_use]
    pub fn mode(&self) -> DeploymentMode {
        self.mode
    }

    /// Issue a seven-day session for `user_id` / `email` and set its cookie.
    ///
    /// Re-issuing overwrites any session cookie already in `store`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentity`] if either field is empty, or
    /// [`Error::Signing`] if the token cannot be produced. On error nothing is
    /// written to `store`.
    pub fn create_session<C: CookieStore>(
        &self,
        store: &mut C,
        user_id: impl Into<UserId>,
        email: impl Into<String>,
    ) -> Result<(), Error> {
        self.create_session_at(store, user_id, email, OffsetDateTime::now_utc())
    }

    /// [`create_session`](Self::create_session) with an explicit issuance time.
    ///
    /// # Errors
    ///
    /// Same as [`create_session`](Self::create_session).
    pub fn create_session_at<C: CookieStore>(
        &self,
        store: &mut C,
        user_id: impl Into<UserId>,
        email: impl Into<String>,
        now: OffsetDateTime,
    ) -> Result<(), Error> {
        let identity = Identity::new(user_id, email)?;
        let user_id = identity.user_id.clone();

        let claims = SessionClaims::new(identity, now)?;
        let token = self.keys.sign(&claims).inspect_err(|e| {
            tracing::error!(error = %e, user_id = %user_id, "Session token signing failed");
        })?;

        store.set(cookies::session_cookie(
            &token,
            claims.expires_at,
            self.mode.secure_cookies(),
        ));

        tracing::debug!(
            user_id = %user_id,
            expires_at = %claims.expires_at,
            secure = self.mode.secure_cookies(),
            "Session issued"
        );
        Ok(())
    }

    /// Remove the session cookie (logout).
    ///
    /// Tokens are self-contained, so a copy of the cookie kept elsewhere stays
    /// valid until it expires.
    pub fn clear_session<C: CookieStore>(&self, store: &mut C) {
        store.delete(cookies::clear_session_cookie());
        tracing::debug!("Session cookie cleared");
    }
}
