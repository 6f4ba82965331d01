//! Stateless session issuance and verification.
//!
//! A session is an HS256 JWT in the `auth-token` cookie. Nothing is stored
//! server-side: the token carries the identity and its own expiry.

mod config;
mod cookies;
mod issuer;
mod store;
mod verifier;

pub use config::{DEVELOPMENT_SECRET, SessionConfig};
pub use cookies::SESSION_COOKIE_NAME;
pub use issuer::SessionIssuer;
pub use store::CookieStore;
pub use verifier::{SessionStatus, SessionVerifier, VerifyError};
