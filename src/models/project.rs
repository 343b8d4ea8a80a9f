/// A project listed on the projects page.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: u32,
    pub name: &'static str,
    pub status: ProjectStatus,
    /// Human-readable age of the last change, e.g. "2 hours ago".
    pub last_modified: &'static str,
}

/// Lifecycle of a project as shown by its status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// CSS modifier for the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Active => "badge-green",
            Self::InProgress => "badge-blue",
            Self::Completed => "badge-gray",
        }
    }
}

impl Project {
    pub fn samples() -> Vec<Project> {
        use ProjectStatus::*;
        vec![
            Project {
                id: 1,
                name: "Analytics Dashboard",
                status: Active,
                last_modified: "2 hours ago",
            },
            Project {
                id: 2,
                name: "API Integration",
                status: InProgress,
                last_modified: "5 hours ago",
            },
            Project {
                id: 3,
                name: "User Management",
                status: Completed,
                last_modified: "1 day ago",
            },
            Project {
                id: 4,
                name: "Data Pipeline",
                status: Active,
                last_modified: "3 days ago",
            },
            Project {
                id: 5,
                name: "Monitoring System",
                status: InProgress,
                last_modified: "1 week ago",
            },
        ]
    }
}
