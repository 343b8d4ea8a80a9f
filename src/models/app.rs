/// An integrated application on the app launcher.
#[derive(Debug, Clone)]
pub struct AppTile {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Accent colour of the tile icon.
    pub accent: &'static str,
}

impl AppTile {
    /// Path of the application's detail view, e.g. `/apps/app1`.
    pub fn path(&self) -> String {
        format!("/apps/app{}", self.id)
    }

    pub fn samples() -> Vec<AppTile> {
        vec![
            AppTile {
                id: 1,
                name: "Application 1",
                description: "Data visualization and analytics",
                accent: "blue",
            },
            AppTile {
                id: 2,
                name: "Application 2",
                description: "Real-time monitoring tools",
                accent: "green",
            },
            AppTile {
                id: 3,
                name: "Application 3",
                description: "Workflow automation system",
                accent: "orange",
            },
            AppTile {
                id: 4,
                name: "Application 4",
                description: "Data processing pipeline",
                accent: "pink",
            },
            AppTile {
                id: 5,
                name: "Application 5",
                description: "Team collaboration hub",
                accent: "cyan",
            },
            AppTile {
                id: 6,
                name: "Application 6",
                description: "Security management",
                accent: "red",
            },
        ]
    }
}

/// Display label for an app detail route parameter.
///
/// Strips the first `app` from the identifier, so `app2` becomes `2` and
/// identifiers without the prefix are shown unchanged.
pub fn app_label(app_id: &str) -> String {
    app_id.replacen("app", "", 1)
}
