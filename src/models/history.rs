/// An entry in the activity history feed.
///
/// Activities are display-only sample data; nothing appends to the feed.
#[derive(Debug, Clone)]
pub struct Activity {
    pub id: u32,
    pub kind: ActivityKind,
    /// Who performed the action.
    pub user: &'static str,
    pub action: &'static str,
    /// Human-readable age, e.g. "5 hours ago".
    pub timestamp: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Edit,
    Create,
    Merge,
}

impl ActivityKind {
    /// Glyph shown in the feed's icon slot.
    pub fn glyph(&self) -> char {
        match self {
            Self::Edit => '✎',
            Self::Create => '◷',
            Self::Merge => '⑂',
        }
    }
}

impl Activity {
    pub fn samples() -> Vec<Activity> {
        use ActivityKind::*;
        vec![
            Activity {
                id: 1,
                kind: Edit,
                user: "John Doe",
                action: "Updated project configuration",
                timestamp: "2 hours ago",
            },
            Activity {
                id: 2,
                kind: Create,
                user: "Jane Smith",
                action: "Created new dashboard view",
                timestamp: "5 hours ago",
            },
            Activity {
                id: 3,
                kind: Merge,
                user: "Mike Johnson",
                action: "Merged feature branch",
                timestamp: "1 day ago",
            },
            Activity {
                id: 4,
                kind: Edit,
                user: "Sarah Williams",
                action: "Modified API endpoints",
                timestamp: "2 days ago",
            },
            Activity {
                id: 5,
                kind: Create,
                user: "John Doe",
                action: "Added new monitoring rules",
                timestamp: "3 days ago",
            },
        ]
    }
}
