use super::{escape, page_heading};
use crate::models::{app_label, AppTile};

pub(super) fn render_launcher() -> String {
    let tiles: String = AppTile::samples()
        .iter()
        .map(|app| {
            format!(
                r#"<div class="card app app-{}">
  <h3 class="title">{}</h3>
  <p class="muted">{}</p>
  <a class="btn btn-secondary" href="{}">Launch App</a>
</div>
"#,
                app.accent,
                escape(app.name),
                escape(app.description),
                app.path()
            )
        })
        .collect();

    format!(
        r#"{}
<div class="grid">
{}</div>"#,
        page_heading("Applications", "Access your integrated applications"),
        tiles
    )
}

/// Placeholder page for a single application.
pub(super) fn render_detail(app_id: &str) -> String {
    let name = format!("Application {}", app_label(app_id));
    format!(
        r#"{}
<section class="card centered-card">
  <h2 class="title">Application Module</h2>
  <p class="muted">This is a placeholder for {}.
    Future app-specific features and components will be implemented here.</p>
</section>"#,
        page_heading(&name, "App-specific content and functionality"),
        escape(&name)
    )
}
