use super::layout::avatar;
use super::{escape, page_heading};
use crate::models::{ProfileDetails, User};

fn field(label: &str, kind: &str, value: &str, disabled: bool) -> String {
    format!(
        r#"<label class="field">{}<input type="{}" value="{}"{}></label>"#,
        label,
        kind,
        escape(value),
        if disabled { " disabled" } else { "" }
    )
}

pub(super) fn render(user: Option<&User>) -> String {
    let details = ProfileDetails::default();
    let username = user.map(|u| u.username.as_str()).unwrap_or_default();
    let email = user.map(User::email).unwrap_or_default();
    let signed_in = user
        .map(|u| u.signed_in_at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_default();

    format!(
        r#"{}
<div class="grid">
<section class="card profile-card">
  <div class="avatar">{}</div>
  <h2 class="title">{}</h2>
  <p class="muted">{}</p>
  <p class="muted">Signed in {}</p>
  <button class="btn btn-secondary">Change Avatar</button>
</section>
<section class="card">
  <h3 class="title">Personal Information</h3>
  {}
  {}
  {}
  {}
  {}
  <div>
    <button class="btn btn-primary">Save Changes</button>
    <form method="post" action="/logout" style="display:inline">
      <button class="btn btn-danger" type="submit">Sign Out</button>
    </form>
  </div>
</section>
</div>"#,
        page_heading("Profile", "Manage your account information"),
        avatar(user),
        escape(username),
        details.role,
        escape(&signed_in),
        field("Full Name", "text", username, false),
        field("Email", "email", &email, false),
        field("Phone", "tel", details.phone, false),
        field("Location", "text", details.location, false),
        field("Member Since", "text", details.member_since, true)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_user_identity() {
        let user = User::new("1", "testuser");
        let html = render(Some(&user));
        assert!(html.contains("<h2 class=\"title\">testuser</h2>"));
        assert!(html.contains(r#"value="testuser@example.com""#));
        assert!(html.contains("Administrator"));
    }

    #[test]
    fn sign_out_posts_to_logout() {
        let html = render(Some(&User::new("1", "testuser")));
        assert!(html.contains(r#"<form method="post" action="/logout""#));
        assert!(html.contains("Sign Out"));
    }

    #[test]
    fn member_since_is_read_only() {
        let html = render(None);
        assert!(html.contains(r#"value="January 2024" disabled"#));
    }
}
