//! Session authentication for Axum.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use uigen_auth::SessionConfig;
//! use uigen_auth::middleware::{AuthSession, session_routes};
//!
//! // 1. Implement Authenticator for your user store
//! // 2. Configure from environment
//! let config = SessionConfig::from_env()?;
//!
//! // 3. Mount the login/logout/session routes
//! let app = axum::Router::new()
//!     .merge(session_routes(&config, authenticator));
//!
//! // 4. Take AuthSession (or Option<AuthSession>) in protected handlers
//! async fn project(AuthSession(user): AuthSession) { /* ... */ }
//! ```

mod error;
mod extractor;
mod routes;
mod state;
mod traits;

pub use error::AuthError;
pub use extractor::{AuthSession, resolve_session};
pub use routes::{AUTH_PATH, session_routes};
pub use traits::Authenticator;
