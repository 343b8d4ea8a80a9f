use super::{escape, page_heading};
use crate::models::{SettingControl, SettingsSection};

fn render_control(control: &SettingControl) -> String {
    match control {
        SettingControl::Toggle { label, enabled } => format!(
            r#"<label class="toggle"><span>{}</span><input type="checkbox"{}></label>"#,
            escape(label),
            if *enabled { " checked" } else { "" }
        ),
        SettingControl::Choice { label, options } => {
            let options: String = options
                .iter()
                .map(|o| format!("<option>{}</option>", escape(o)))
                .collect();
            format!(
                r#"<label class="field">{}<select>{}</select></label>"#,
                escape(label),
                options
            )
        }
    }
}

pub(super) fn render() -> String {
    let sections: String = SettingsSection::samples()
        .iter()
        .map(|section| {
            let controls: Vec<String> = section.controls.iter().map(render_control).collect();
            format!(
                "<section class=\"card\">\n<h2 class=\"title\">{}</h2>\n{}\n</section>\n",
                escape(section.title),
                controls.join("\n")
            )
        })
        .collect();

    format!(
        r#"{}
<div class="grid">
{}</div>
<div>
  <button class="btn btn-primary">Save Changes</button>
  <button class="btn btn-secondary">Reset to Default</button>
</div>"#,
        page_heading("Settings", "Configure your application preferences"),
        sections
    )
}
