/// A titled group of preferences on the settings page.
#[derive(Debug, Clone)]
pub struct SettingsSection {
    pub title: &'static str,
    pub controls: Vec<SettingControl>,
}

/// A single preference control.
///
/// - `Toggle`: A checkbox with its default state
/// - `Choice`: A select box; the first option is the default
#[derive(Debug, Clone)]
pub enum SettingControl {
    Toggle {
        label: &'static str,
        enabled: bool,
    },
    Choice {
        label: &'static str,
        options: &'static [&'static str],
    },
}

impl SettingControl {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Toggle { label, .. } | Self::Choice { label, .. } => *label,
        }
    }
}

impl SettingsSection {
    pub fn samples() -> Vec<SettingsSection> {
        use SettingControl::*;
        vec![
            SettingsSection {
                title: "Notifications",
                controls: vec![
                    Toggle { label: "Email notifications", enabled: true },
                    Toggle { label: "Push notifications", enabled: false },
                    Toggle { label: "Activity alerts", enabled: true },
                ],
            },
            SettingsSection {
                title: "Security",
                controls: vec![
                    Toggle { label: "Two-factor authentication", enabled: false },
                    Toggle { label: "Session timeout", enabled: true },
                    Toggle { label: "Login notifications", enabled: true },
                ],
            },
            SettingsSection {
                title: "Appearance",
                controls: vec![
                    Choice { label: "Theme", options: &["Dark", "Light", "Auto"] },
                    Choice { label: "Font size", options: &["Small", "Medium", "Large"] },
                ],
            },
            SettingsSection {
                title: "Regional",
                controls: vec![
                    Choice { label: "Language", options: &["English", "Spanish", "French"] },
                    Choice { label: "Timezone", options: &["UTC", "EST", "PST"] },
                ],
            },
        ]
    }
}
