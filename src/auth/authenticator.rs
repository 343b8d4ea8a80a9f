use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::models::{User, MOCK_USER_ID};

/// Simulated round trip of the mock sign-in.
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(500);

/// Login errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Credentials were rejected. The mock authenticator never returns this;
    /// it is reserved for real verification.
    #[error("Authentication failed for {0}")]
    AuthenticationFailed(String),
}

/// Outcome of waiting on a [`super::LoginTask`] that did not sign anyone in.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginTaskError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The task was aborted before it committed.
    #[error("Login cancelled before completion")]
    Cancelled,
}

/// Verifies credentials and produces the identity to sign in.
///
/// Implementations must not touch session state; committing the result is the
/// store's job, which is what keeps a failed verification side-effect free.
pub trait Authenticator: Send + Sync + 'static {
    fn verify(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<User, AuthError>> + Send;
}

/// Accepts any credentials after a fixed delay.
#[derive(Debug, Clone)]
pub struct MockAuthenticator {
    delay: Duration,
}

impl MockAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_DELAY)
    }
}

impl Authenticator for MockAuthenticator {
    async fn verify(&self, username: &str, _password: &str) -> Result<User, AuthError> {
        tokio::time::sleep(self.delay).await;
        Ok(User::new(MOCK_USER_ID, username))
    }
}
