use super::{escape, page_heading};
use crate::models::Activity;

pub(super) fn render() -> String {
    let entries: String = Activity::samples()
        .iter()
        .map(|activity| {
            format!(
                r#"<li class="activity">
  <span class="activity-icon">{}</span>
  <p>{}</p>
  <p class="muted">{} • {}</p>
</li>
"#,
                activity.kind.glyph(),
                escape(activity.action),
                escape(activity.user),
                escape(activity.timestamp)
            )
        })
        .collect();

    format!(
        r#"{}
<ul class="card">
{}</ul>"#,
        page_heading("Activity History", "Track recent changes and updates"),
        entries
    )
}
