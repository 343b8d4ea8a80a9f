/// Contact details shown on the profile page.
///
/// These are fixed placeholders; only the name and email are derived from the
/// signed-in [`super::User`].
#[derive(Debug, Clone)]
pub struct ProfileDetails {
    pub role: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub member_since: &'static str,
}

impl Default for ProfileDetails {
    fn default() -> Self {
        Self {
            role: "Administrator",
            phone: "+1 (555) 123-4567",
            location: "San Francisco, CA",
            member_since: "January 2024",
        }
    }
}
