use std::sync::Arc;

use time::OffsetDateTime;

use crate::token::SessionKeys;
use crate::types::Identity;

/// Why a present session token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    /// Signature mismatch, corrupt structure, unsupported algorithm, or
    /// inconsistent claims.
    #[error("Invalid session token: {0}")]
    Invalid(String),

    /// Signature valid, but the session lifetime has elapsed.
    #[error("Session expired")]
    Expired,
}

/// Outcome of verifying the session cookie.
///
/// Only [`SessionStatus::Authenticated`] grants access; the other two
/// variants are kept apart for diagnostics and user messaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Authenticated(Identity),
    /// No session cookie was sent, or it was empty.
    Unauthenticated,
    Rejected(VerifyError),
}

impl SessionStatus {
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_identity(self) -> Option<Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Validates `auth-token` cookie values.
#[derive(Debug, Clone)]
pub struct SessionVerifier {
    keys: Arc<SessionKeys>,
}

impl SessionVerifier {
    #[must_use]
    pub fn new(keys: Arc<SessionKeys>) -> Self {
        Self { keys }
    }

    /// Verify a session cookie value against the current time.
    #[must_use]
    pub fn verify_session(&self, cookie_value: Option<&str>) -> SessionStatus {
        self.verify_session_at(cookie_value, OffsetDateTime::now_utc())
    }

    /// Verify a session cookie value as of `now`.
    ///
    /// An empty value (a cleared cookie sent back) counts as no cookie.
    /// Pure in (`cookie_value`, `now`, signing secret).
    #[must_use]
    pub fn verify_session_at(
        &self,
        cookie_value: Option<&str>,
        now: OffsetDateTime,
    ) -> SessionStatus {
        let Some(token) = cookie_value.filter(|v| !v.is_empty()) else {
            return SessionStatus::Unauthenticated;
        };

        match self.check(token, now) {
            Ok(identity) => {
                tracing::debug!(user_id = %identity.user_id, "Session verified");
                SessionStatus::Authenticated(identity)
            }
            Err(VerifyError::Expired) => {
                tracing::debug!("Session token expired");
                SessionStatus::Rejected(VerifyError::Expired)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session token rejected");
                SessionStatus::Rejected(e)
            }
        }
    }

    fn check(&self, token: &str, now: OffsetDateTime) -> Result<Identity, VerifyError> {
        let claims = self
            .keys
            .decode(token)
            .map_err(|e| VerifyError::Invalid(e.to_string()))?;

        if !claims.expirations_agree() {
            return Err(VerifyError::Invalid("exp and expiresAt disagree".into()));
        }
        if claims.is_expired_at(now) {
            return Err(VerifyError::Expired);
        }

        Ok(claims.identity())
    }
}

#[cfg(test)]
mod tests {
    use axum_extra::extract::CookieJar;
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    use time::Duration;
    use time::macros::datetime;

    use super::*;
    use crate::session::{SESSION_COOKIE_NAME, SessionIssuer};
    use crate::token::SessionClaims;
    use crate::types::DeploymentMode;

    const T0: OffsetDateTime = datetime!(2025-06-01 08:00 UTC);

    fn keys() -> Arc<SessionKeys> {
        Arc::new(SessionKeys::from_secret(b"test-secret").unwrap())
    }

    fn issue_at(keys: &Arc<SessionKeys>, user_id: &str, email: &str, now: OffsetDateTime) -> String {
        let issuer = SessionIssuer::new(keys.clone(), DeploymentMode::Development);
        let mut jar = CookieJar::new();
        issuer.create_session_at(&mut jar, user_id, email, now).unwrap();
        jar.get(SESSION_COOKIE_NAME).unwrap().value().to_string()
    }

    #[test]
    fn absent_cookie_is_unauthenticated() {
        let verifier = SessionVerifier::new(keys());
        assert_eq!(verifier.verify_session(None), SessionStatus::Unauthenticated);
    }

    #[test]
    fn empty_cookie_is_unauthenticated() {
        let verifier = SessionVerifier::new(keys());
        assert_eq!(verifier.verify_session(Some("")), SessionStatus::Unauthenticated);
        assert_eq!(
            verifier.verify_session_at(Some(""), T0),
            SessionStatus::Unauthenticated
        );
    }

    #[test]
    fn issued_session_round_trips() {
        let keys = keys();
        let verifier = SessionVerifier::new(keys.clone());
        let token = issue_at(&keys, "user123", "test@example.com", T0);

        let status = verifier.verify_session_at(Some(&token), T0 + Duration::hours(1));
        let identity = status.into_identity().unwrap();
        assert_eq!(identity.user_id.as_str(), "user123");
        assert_eq!(identity.email, "test@example.com");
    }

    #[test]
    fn round_trip_against_wall_clock() {
        let keys = keys();
        let verifier = SessionVerifier::new(keys.clone());
        let token = issue_at(&keys, "abc123", "user1@test.com", OffsetDateTime::now_utc());

        assert!(verifier.verify_session(Some(&token)).is_authenticated());
    }

    #[test]
    fn expired_after_seven_days() {
        let keys = keys();
        let verifier = SessionVerifier::new(keys.clone());
        let token = issue_at(&keys, "user123", "test@example.com", T0);

        let status =
            verifier.verify_session_at(Some(&token), T0 + Duration::days(7) + Duration::seconds(1));
        assert_eq!(status, SessionStatus::Rejected(VerifyError::Expired));
    }

    #[test]
    fn expired_exactly_at_boundary() {
        let keys = keys();
        let verifier = SessionVerifier::new(keys.clone());
        let token = issue_at(&keys, "user123", "test@example.com", T0);

        let just_before = T0 + Duration::days(7) - Duration::milliseconds(1);
        assert!(verifier.verify_session_at(Some(&token), just_before).is_authenticated());
        assert_eq!(
            verifier.verify_session_at(Some(&token), T0 + Duration::days(7)),
            SessionStatus::Rejected(VerifyError::Expired)
        );
    }

    #[test]
    fn tampered_byte_is_invalid() {
        let keys = keys();
        let verifier = SessionVerifier::new(keys.clone());
        let token = issue_at(&keys, "user123", "test@example.com", T0);
        let now = T0 + Duration::hours(1);

        for index in 0..token.len() {
            let mut bytes = token.clone().into_bytes();
            bytes[index] = if bytes[index] == b'A' { b'B' } else { b'A' };
            let tampered = String::from_utf8(bytes).unwrap();

            let status = verifier.verify_session_at(Some(&tampered), now);
            assert!(
                matches!(status, SessionStatus::Rejected(VerifyError::Invalid(_))),
                "tampering byte {index} gave {status:?}"
            );
        }
    }

    #[test]
    fn other_secret_is_invalid() {
        let token = issue_at(&keys(), "user123", "test@example.com", T0);
        let other = SessionVerifier::new(Arc::new(SessionKeys::from_secret(b"other").unwrap()));

        assert!(matches!(
            other.verify_session_at(Some(&token), T0),
            SessionStatus::Rejected(VerifyError::Invalid(_))
        ));
    }

    #[test]
    fn garbage_is_invalid() {
        let verifier = SessionVerifier::new(keys());
        for value in ["not-a-token", "a.b.c", "mock-jwt-token"] {
            assert!(matches!(
                verifier.verify_session_at(Some(value), T0),
                SessionStatus::Rejected(VerifyError::Invalid(_))
            ));
        }
    }

    #[test]
    fn unsupported_algorithm_is_invalid() {
        let identity = Identity::new("user123", "test@example.com").unwrap();
        let claims = SessionClaims::new(identity, T0).unwrap();
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let verifier = SessionVerifier::new(keys());
        assert!(matches!(
            verifier.verify_session_at(Some(&token), T0),
            SessionStatus::Rejected(VerifyError::Invalid(_))
        ));
    }

    #[test]
    fn disagreeing_expirations_are_invalid() {
        let identity = Identity::new("user123", "test@example.com").unwrap();
        let mut claims = SessionClaims::new(identity, T0).unwrap();
        claims.exp += 3600;
        let keys = keys();
        let token = keys.sign(&claims).unwrap();

        let verifier = SessionVerifier::new(keys);
        assert!(matches!(
            verifier.verify_session_at(Some(&token), T0),
            SessionStatus::Rejected(VerifyError::Invalid(_))
        ));
    }

    #[test]
    fn past_expiry_with_valid_signature_is_expired() {
        let identity = Identity::new("user123", "test@example.com").unwrap();
        let claims = SessionClaims::new(identity, T0 - Duration::days(30)).unwrap();
        let keys = keys();
        let token = keys.sign(&claims).unwrap();

        let verifier = SessionVerifier::new(keys);
        assert_eq!(
            verifier.verify_session_at(Some(&token), T0),
            SessionStatus::Rejected(VerifyError::Expired)
        );
    }

    #[test]
    fn verification_is_deterministic() {
        let keys = keys();
        let verifier = SessionVerifier::new(keys.clone());
        let token = issue_at(&keys, "user123", "test@example.com", T0);
        let now = T0 + Duration::days(2);

        assert_eq!(
            verifier.verify_session_at(Some(&token), now),
            verifier.verify_session_at(Some(&token), now)
        );
    }
}
