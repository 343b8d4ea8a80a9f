use super::{escape, page_heading};
use crate::models::Project;

pub(super) fn render() -> String {
    let cards: String = Project::samples()
        .iter()
        .map(|project| {
            format!(
                r#"<div class="card project">
  <h3 class="title">{}</h3>
  <p class="muted">{}</p>
  <span class="badge {}">{}</span>
</div>
"#,
                escape(project.name),
                escape(project.last_modified),
                project.status.badge_class(),
                project.status.label()
            )
        })
        .collect();

    format!(
        r#"{}
<div><button class="btn btn-primary">New Project</button></div>
<div class="grid">
{}</div>"#,
        page_heading("Projects", "Manage and monitor your active projects"),
        cards
    )
}
