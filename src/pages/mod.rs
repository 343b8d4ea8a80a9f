//! Server-side page rendering.
//!
//! Pages are plain HTML strings assembled from the sample data in
//! [`crate::models`]. The only session state they read is the signed-in
//! [`User`], passed in by the caller.

mod apps;
mod dashboard;
mod history;
mod layout;
mod login;
mod profile;
mod projects;
mod settings;

pub use layout::{document, shell};
pub use login::LoginForm;

use crate::models::User;
use crate::routes::View;

/// Render a routed view.
///
/// The login view is a standalone page; every other view is wrapped in the
/// navigation shell, with `current_path` marking the active sidebar entry.
pub fn render_view(view: &View, user: Option<&User>, current_path: &str) -> String {
    let (title, content) = match view {
        View::Login => return login::render(&LoginForm::default()),
        View::Dashboard => ("Dashboard", dashboard::render()),
        View::Projects => ("Projects", projects::render()),
        View::History => ("Activity History", history::render()),
        View::Apps => ("Applications", apps::render_launcher()),
        View::AppDetail { app_id } => ("Application", apps::render_detail(app_id)),
        View::Settings => ("Settings", settings::render()),
        View::Profile => ("Profile", profile::render(user)),
    };
    document(title, &shell(current_path, user, &content))
}

/// The sign-in page with a prefilled username and an optional error line.
pub fn render_login(form: &LoginForm) -> String {
    login::render(form)
}

/// Page shown for paths the route table does not know.
pub fn render_not_found(path: &str) -> String {
    let body = format!(
        r#"<main class="centered">
  <h1 class="title">Page not found</h1>
  <p class="muted">Nothing lives at <code>{}</code>.</p>
  <a class="btn btn-primary" href="/dashboard">Back to dashboard</a>
</main>"#,
        escape(path)
    );
    document("Page not found", &body)
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(c),
        }
    }
    output
}

/// Heading block shared by every page in the shell.
fn page_heading(title: &str, subtitle: &str) -> String {
    format!(
        r#"<div class="page-heading">
  <h1 class="title">{}</h1>
  <p class="muted">{}</p>
</div>"#,
        escape(title),
        escape(subtitle)
    )
}
