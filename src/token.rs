use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::error::Error;
use crate::types::{Identity, UserId};

/// Lifetime of a session, counted from issuance.
pub const SESSION_TTL: Duration = Duration::days(7);

/// Claim set signed into the `auth-token` credential.
///
/// `expires_at` and `exp` describe the same instant: both are derived from a
/// single `issued_at + SESSION_TTL` computation in [`SessionClaims::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub user_id: UserId,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
    /// Issued-at (Unix timestamp, seconds).
    pub iat: i64,
    /// Expiration (Unix timestamp, seconds).
    pub exp: i64,
}

impl SessionClaims {
    /// Builds the claims for a session issued at `issued_at`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Signing` if the expiration is not representable.
    pub fn new(identity: Identity, issued_at: OffsetDateTime) -> Result<Self, Error> {
        let expires_at = issued_at
            .checked_add(SESSION_TTL)
            .ok_or_else(|| Error::Signing("session expiration out of range".into()))?;
        Ok(Self {
            user_id: identity.user_id,
            email: identity.email,
            expires_at,
            iat: issued_at.unix_timestamp(),
            exp: expires_at.unix_timestamp(),
        })
    }

    /// Whether the registered `exp` claim matches `expiresAt`.
    #[must_use]
    pub fn expirations_agree(&self) -> bool {
        self.exp == self.expires_at.unix_timestamp()
    }

    /// Expiration is a hard boundary: the session is dead at `expires_at`.
    #[must_use]
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        now >= self.expires_at
    }

    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.user_id.clone(),
            email: self.email.clone(),
        }
    }
}

/// HMAC-SHA-256 signing material, built once at startup and shared read-only.
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKeys")
            .field("algorithm", &Algorithm::HS256)
            .finish_non_exhaustive()
    }
}

impl SessionKeys {
    /// Creates keys from a shared secret.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the secret is empty.
    pub fn from_secret(secret: &[u8]) -> Result<Self, Error> {
        if secret.is_empty() {
            return Err(Error::Config("signing secret must not be empty".into()));
        }

        // Expiry is checked by the verifier against its own clock, with no leeway.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Signs claims into a compact HS256 JWT.
    ///
    /// # Errors
    ///
    /// Returns `Error::Signing` if the claims cannot be serialized or signed.
    pub fn sign(&self, claims: &SessionClaims) -> Result<String, Error> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| Error::Signing(e.to_string()))
    }

    /// Checks the signature and structure of a token and returns its claims.
    ///
    /// Time-based checks are left to the caller.
    pub(crate) fn decode(
        &self,
        token: &str,
    ) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
        decode::<SessionClaims>(token, &self.decoding, &self.validation).map(|data| data.claims)
    }
}
