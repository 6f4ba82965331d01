use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Application user identifier (opaque string).
///
/// Supplied by the login collaborator and copied verbatim into the session
/// token. The crate never interprets its format.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// The authenticated principal carried by a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: UserId,
    pub email: String,
}

impl Identity {
    /// Build an identity, checking only that both fields are present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentity`] if `user_id` or `email` is empty.
    pub fn new(user_id: impl Into<UserId>, email: impl Into<String>) -> Result<Self, Error> {
        let user_id = user_id.into();
        let email = email.into();
        if user_id.0.is_empty() {
            return Err(Error::InvalidIdentity("user id"));
        }
        if email.is_empty() {
            return Err(Error::InvalidIdentity("email"));
        }
        Ok(Self { user_id, email })
    }
}

/// Deployment mode of the running process.
///
/// Decides whether session cookies carry the `Secure` attribute: only
/// production traffic is guaranteed to be HTTPS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    #[default]
    Development,
    Test,
    Production,
}

impl DeploymentMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }

    #[must_use]
    pub fn is_production(self) -> bool {
        self == Self::Production
    }

    /// Value of the cookie `Secure` attribute for this mode.
    #[must_use]
    pub fn secure_cookies(self) -> bool {
        self.is_production()
    }
}

impl std::fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeploymentMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            "production" | "prod" => Ok(Self::Production),
            other => Err(Error::Config(format!("unknown deployment mode '{other}'"))),
        }
    }
}
