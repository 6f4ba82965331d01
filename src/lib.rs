#![doc = include_str!("../README.md")]

pub mod error;
#[cfg(feature = "middleware")]
pub mod middleware;
pub mod session;
pub mod token;
pub mod types;

// Re-exports for convenient access
pub use error::Error;
pub use session::{
    CookieStore, SESSION_COOKIE_NAME, SessionConfig, SessionIssuer, SessionStatus,
    SessionVerifier, VerifyError,
};
pub use token::{SESSION_TTL, SessionClaims, SessionKeys};
pub use types::{DeploymentMode, Identity, UserId};
