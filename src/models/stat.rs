/// A headline figure on the dashboard.
#[derive(Debug, Clone)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    /// Change since the previous period, e.g. "+12.5%".
    pub change: &'static str,
    pub positive: bool,
}

impl Stat {
    pub fn samples() -> Vec<Stat> {
        vec![
            Stat { label: "Active Sessions", value: "1,248", change: "+12.5%", positive: true },
            Stat { label: "Total Projects", value: "34", change: "+4", positive: true },
            Stat { label: "Team Members", value: "18", change: "+2", positive: true },
            Stat { label: "Performance", value: "94.2%", change: "+2.1%", positive: true },
        ]
    }
}
