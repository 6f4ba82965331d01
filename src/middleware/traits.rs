use std::future::Future;

use crate::types::Identity;

/// Consumer-provided credential check.
///
/// Called by the login route. Return `Ok(None)` for an unknown email or a
/// wrong password; reserve `Err` for infrastructure failures.
///
/// # Example
///
/// ```rust,ignore
/// impl Authenticator for MyAppState {
///     async fn authenticate(
///         &self,
///         email: &str,
///         password: &str,
///     ) -> Result<Option<Identity>, Box<dyn std::error::Error + Send + Sync>> {
///         let Some(user) = self.repo.find_by_email(email).await? else {
///             return Ok(None);
///         };
///         if !bcrypt::verify(password, &user.password_hash)? {
///             return Ok(None);
///         }
///         Ok(Some(Identity::new(user.id, user.email)?))
///     }
/// }
/// ```
pub trait Authenticator: Send + Sync + 'static {
    fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Option<Identity>, Box<dyn std::error::Error + Send + Sync>>>
           + Send;
}
