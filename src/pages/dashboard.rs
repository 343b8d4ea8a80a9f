use super::{escape, page_heading};
use crate::models::Stat;

pub(super) fn render() -> String {
    let stats: String = Stat::samples()
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="card stat">
  <span class="{}">{}</span>
  <div class="title">{}</div>
  <div class="muted">{}</div>
</div>
"#,
                if stat.positive { "positive" } else { "negative" },
                escape(stat.change),
                escape(stat.value),
                escape(stat.label)
            )
        })
        .collect();

    format!(
        r#"{}
<div class="grid">
{}</div>
<section class="card">
  <h2 class="title">Visualization Area</h2>
  <p class="muted">Complex data visualization components will be rendered here</p>
</section>"#,
        page_heading("Dashboard", "Welcome to your monitoring dashboard"),
        stats
    )
}
