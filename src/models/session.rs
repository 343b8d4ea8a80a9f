use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to every mock sign-in.
pub const MOCK_USER_ID: &str = "1";

/// The identity behind an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Image URL; when absent the UI shows the username's initial instead.
    pub avatar: Option<String>,
    pub signed_in_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            avatar: None,
            signed_in_at: Utc::now(),
        }
    }

    /// Uppercased first character of the username, used as the avatar fallback.
    pub fn initial(&self) -> Option<String> {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
    }

    pub fn email(&self) -> String {
        format!("{}@example.com", self.username)
    }
}

/// Who, if anyone, is signed in.
///
/// The authentication flag is derived from the presence of a [`User`], so a
/// session can never claim to be authenticated without an identity (or the
/// reverse). Sessions are replaced wholesale on every transition; there are no
/// setters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn state(&self) -> SessionState {
        if self.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }
}

/// The two states of the session machine.
///
/// - `Anonymous`: Initial state, and the state after every logout
/// - `Authenticated`: Entered (or re-entered) by each successful login
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Authenticated => "authenticated",
        }
    }
}

/// Credentials submitted by the login form or the JSON API.
#[derive(Clone, Deserialize, Serialize)]
pub struct LoginInput {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginInput")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Wire representation of a [`Session`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionResponse {
    pub is_authenticated: bool,
    pub state: SessionState,
    pub user: Option<User>,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            is_authenticated: session.is_authenticated(),
            state: session.state(),
            user: session.user().cloned(),
        }
    }
}
