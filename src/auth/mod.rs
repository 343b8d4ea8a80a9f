//! Session store.
//!
//! [`SessionStore`] is the single source of truth for who, if anyone, is signed
//! in. It is a cheap handle: clones share the same session, so one store is
//! created per application and injected wherever it is needed.
//!
//! The current [`Session`] lives in a [`tokio::sync::watch`] channel. Every
//! transition replaces the whole record in one step, which keeps the
//! authenticated flag and the user consistent for every reader and wakes any
//! subscriber.

mod authenticator;

pub use authenticator::*;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::models::Session;

pub struct SessionStore<A = MockAuthenticator> {
    authenticator: Arc<A>,
    session: Arc<watch::Sender<Session>>,
}

impl<A> Clone for SessionStore<A> {
    fn clone(&self) -> Self {
        Self {
            authenticator: Arc::clone(&self.authenticator),
            session: Arc::clone(&self.session),
        }
    }
}

impl<A> std::fmt::Debug for SessionStore<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &*self.session.borrow())
            .finish_non_exhaustive()
    }
}

impl SessionStore<MockAuthenticator> {
    /// Create a store whose logins succeed after `login_delay`.
    pub fn new(login_delay: Duration) -> Self {
        Self::with_authenticator(MockAuthenticator::new(login_delay))
    }
}

impl Default for SessionStore<MockAuthenticator> {
    fn default() -> Self {
        Self::with_authenticator(MockAuthenticator::default())
    }
}

impl<A: Authenticator> SessionStore<A> {
    /// Create an anonymous store backed by `authenticator`.
    pub fn with_authenticator(authenticator: A) -> Self {
        let (session, _) = watch::channel(Session::anonymous());
        Self {
            authenticator: Arc::new(authenticator),
            session: Arc::new(session),
        }
    }

    /// Sign in.
    ///
    /// Suspends while the authenticator verifies the credentials, then commits
    /// the authenticated session. Overlapping logins each commit when they
    /// finish, so the last one to complete wins. On failure the session is left
    /// exactly as it was.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let user = match self.authenticator.verify(username, password).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Login rejected for {}: {}", username, e);
                return Err(e);
            }
        };

        let session = Session::authenticated(user);
        self.session.send_replace(session.clone());
        tracing::info!("Signed in as {}", username);
        Ok(session)
    }

    /// Run [`login`](Self::login) as a background task.
    ///
    /// The returned handle can be awaited or cancelled. Cancelling before the
    /// commit leaves the session untouched.
    pub fn begin_login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> LoginTask {
        let store = self.clone();
        let username = username.into();
        let password = password.into();
        let id = Uuid::new_v4();
        tracing::debug!("Starting login task {} for {}", id, username);

        let handle = tokio::spawn(async move { store.login(&username, &password).await });
        LoginTask { id, handle }
    }

    /// Sign out. Signing out while anonymous is a no-op.
    pub fn logout(&self) {
        let previous = self.session.send_replace(Session::anonymous());
        match previous.user() {
            Some(user) => tracing::info!("Signed out {}", user.username),
            None => tracing::debug!("Logout while already anonymous"),
        }
    }

    /// Snapshot of the current session.
    pub fn current_session(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Receive every committed session transition.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.session.subscribe()
    }
}

/// Handle to a login running in the background.
#[derive(Debug)]
pub struct LoginTask {
    id: Uuid,
    handle: JoinHandle<Result<Session, AuthError>>,
}

impl LoginTask {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Abort the login. Has no effect once the session has been committed.
    pub fn cancel(&self) {
        tracing::debug!("Cancelling login task {}", self.id);
        self.handle.abort();
    }

    /// Wait for the login to finish.
    pub async fn wait(self) -> Result<Session, LoginTaskError> {
        match self.handle.await {
            Ok(result) => Ok(result?),
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(_) => Err(LoginTaskError::Cancelled),
        }
    }
}
