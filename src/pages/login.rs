use super::{document, escape};

/// State of the sign-in form when it is (re)rendered.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn with_error(username: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            error: Some(error.into()),
        }
    }
}

pub(super) fn render(form: &LoginForm) -> String {
    let error = form
        .error
        .as_deref()
        .map(|e| format!("<p class=\"error\" role=\"alert\">{}</p>\n", escape(e)))
        .unwrap_or_default();

    let body = format!(
        r#"<main class="centered">
  <div class="logo">⬡</div>
  <h1 class="title">Welcome Back</h1>
  <p class="muted">Sign in to access your dashboard</p>
  <form class="card" method="post" action="/login">
    {}<label class="field">Username
      <input type="text" name="username" value="{}" placeholder="Enter your username" required>
    </label>
    <label class="field">Password
      <input type="password" name="password" placeholder="Enter your password" required>
    </label>
    <button class="btn btn-primary" type="submit">Sign In</button>
  </form>
  <p class="muted">Mock authentication - use any credentials</p>
</main>"#,
        error,
        escape(&form.username)
    );
    document("Sign In", &body)
}
