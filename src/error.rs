#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Token signing error: {0}")]
    Signing(String),
    #[error("Invalid identity: {0} is required")]
    InvalidIdentity(&'static str),
}
