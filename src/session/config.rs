use std::sync::Arc;

use super::issuer::SessionIssuer;
use super::verifier::SessionVerifier;
use crate::error::Error;
use crate::token::SessionKeys;
use crate::types::DeploymentMode;

/// Secret used outside production when `JWT_SECRET` is unset.
pub const DEVELOPMENT_SECRET: &str = "development-secret-key";

/// Session configuration.
///
/// Holds the signing keys and deployment mode. Built once at startup; the
/// issuer and verifier it hands out share the same immutable keys.
///
/// Use [`from_env()`](SessionConfig::from_env) for convention-based setup,
/// or [`new()`](SessionConfig::new) with `with_*` methods for full control.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    keys: Arc<SessionKeys>,
    mode: DeploymentMode,
}

impl SessionConfig {
    /// Create config from a signing secret and deployment mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `secret` is empty.
    pub fn new(secret: impl AsRef<[u8]>, mode: DeploymentMode) -> Result<Self, Error> {
        Ok(Self {
            keys: Arc::new(SessionKeys::from_secret(secret.as_ref())?),
            mode,
        })
    }

    /// Create config from environment variables.
    ///
    /// # Env vars
    /// - `APP_ENV`: `development` (default), `test` or `production`
    /// - `JWT_SECRET`: HMAC signing secret. Required in production; other
    ///   modes fall back to [`DEVELOPMENT_SECRET`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `APP_ENV` is not a known mode, or if
    /// `JWT_SECRET` is missing or empty in production.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(
            std::env::var("APP_ENV").ok().as_deref(),
            std::env::var("JWT_SECRET").ok().as_deref(),
        )
    }

    fn from_vars(app_env: Option<&str>, secret: Option<&str>) -> Result<Self, Error> {
        let mode = match app_env {
            Some(value) => value.parse()?,
            None => DeploymentMode::default(),
        };

        let secret = match secret.filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None if mode.is_production() => {
                return Err(Error::Config("JWT_SECRET is required in production".into()));
            }
            None => {
                tracing::warn!(mode = %mode, "JWT_SECRET not set, using development secret");
                DEVELOPMENT_SECRET
            }
        };

        Self::new(secret, mode)
    }

    /// Replace the signing secret.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `secret` is empty.
    pub fn with_secret(mut self, secret: impl AsRef<[u8]>) -> Result<Self, Error> {
        self.keys = Arc::new(SessionKeys::from_secret(secret.as_ref())?);
        Ok(self)
    }

    #[must_use]
    pub fn with_mode(mut self, mode: DeploymentMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn mode(&self) -> DeploymentMode {
        self.mode
    }

    #[must_use]
    pub fn issuer(&self) -> SessionIssuer {
        SessionIssuer::new(self.keys.clone(), self.mode)
    }

    #[must_use]
    pub fn verifier(&self) -> SessionVerifier {
        SessionVerifier::new(self.keys.clone())
    }
}
