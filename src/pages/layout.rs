//! Document wrapper and the persistent navigation shell.

use super::escape;
use crate::models::User;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("/dashboard", "Home"),
    ("/projects", "Projects"),
    ("/history", "History"),
    ("/apps", "Apps"),
];

const APP_LAUNCHERS: &[(&str, &str)] = &[
    ("/apps/app1", "App 1"),
    ("/apps/app2", "App 2"),
    ("/apps/app3", "App 3"),
];

const SAVED_VIEWS: &[&str] = &["Default View", "Analytics", "Overview", "Monitoring"];

const STYLES: &str = r#"
*{box-sizing:border-box}body{margin:0;background:#1a1a1a;color:#e5e7eb;font-family:system-ui,sans-serif}
a{color:inherit;text-decoration:none}.muted{color:#9ca3af}.title{color:#fff;margin:0 0 .5rem}
.layout{display:flex;min-height:100vh}.sidebar{width:5rem;background:#0f0f0f;border-right:1px solid #1f2937;display:flex;flex-direction:column;align-items:center;padding:1.5rem 0;gap:1rem}
.nav-item{width:3rem;height:3rem;border-radius:.5rem;display:flex;align-items:center;justify-content:center;color:#9ca3af;font-size:.65rem}
.nav-item.active{background:rgba(59,130,246,.2);color:#60a5fa}.nav-divider{width:3rem;height:1px;background:#1f2937}
.avatar{width:3rem;height:3rem;border-radius:9999px;background:#374151;display:flex;align-items:center;justify-content:center;border:2px solid #374151}
.avatar.active{border-color:#60a5fa}.logo{width:2.5rem;height:2.5rem;border-radius:.5rem;background:linear-gradient(#3b82f6,#2563eb);display:flex;align-items:center;justify-content:center;color:#fff}
.main{flex:1;display:flex;flex-direction:column}.header{height:4rem;background:#0f0f0f;border-bottom:1px solid #1f2937;display:flex;align-items:center;gap:1rem;padding:0 1.5rem}
.search{flex:1;max-width:42rem;background:#1a1a1a;border:1px solid #374151;border-radius:.5rem;padding:.5rem 1rem;color:#e5e7eb}
.chip{padding:.5rem .75rem;border-radius:.5rem;border:1px solid #374151;background:#1a1a1a;color:#9ca3af;font-size:.85rem}.chip.active{background:rgba(59,130,246,.2);color:#60a5fa}
.content{flex:1;padding:1.5rem;display:flex;flex-direction:column;gap:1.5rem}.card{background:#0f0f0f;border:1px solid #1f2937;border-radius:.75rem;padding:1.5rem}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(16rem,1fr));gap:1rem}.btn{border:0;border-radius:.5rem;padding:.6rem 1.2rem;cursor:pointer;font-size:.9rem}
.btn-primary{background:#3b82f6;color:#fff}.btn-secondary{background:#1a1a1a;color:#d1d5db;border:1px solid #374151}.btn-danger{background:rgba(239,68,68,.15);color:#f87171}
.badge{padding:.2rem .6rem;border-radius:9999px;font-size:.75rem;border:1px solid}.badge-green{color:#4ade80}.badge-blue{color:#60a5fa}.badge-gray{color:#9ca3af}
.positive{color:#4ade80}.negative{color:#f87171}.field{display:flex;flex-direction:column;gap:.4rem;margin-bottom:1rem}
.field input,.field select{background:#1a1a1a;border:1px solid #374151;border-radius:.5rem;padding:.6rem .9rem;color:#e5e7eb}
.error{color:#f87171;margin-bottom:1rem}.centered{min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;gap:1rem}
"#;

/// Wrap `body` in a complete HTML document.
pub fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{} | Hexboard</title>
<style>{}</style>
</head>
<body>
{}
</body>
</html>
"#,
        escape(title),
        STYLES,
        body
    )
}

/// Sidebar, header and content area shared by every protected view.
pub fn shell(current_path: &str, user: Option<&User>, content: &str) -> String {
    format!(
        r#"<div class="layout">
{}
<div class="main">
{}
<main class="content">
{}
</main>
</div>
</div>"#,
        sidebar(current_path, user),
        header(),
        content
    )
}

fn active(current_path: &str, path: &str) -> &'static str {
    if current_path == path {
        " active"
    } else {
        ""
    }
}

fn sidebar(current_path: &str, user: Option<&User>) -> String {
    let mut output = String::from(
        r#"<nav class="sidebar">
<a class="logo" href="/dashboard" title="Home">⬡</a>
"#,
    );

    for (path, label) in NAV_ITEMS {
        output.push_str(&nav_link(current_path, path, label));
    }
    output.push_str("<div class=\"nav-divider\"></div>\n");
    for (path, label) in APP_LAUNCHERS {
        output.push_str(&nav_link(current_path, path, label));
    }

    output.push_str(&nav_link(current_path, "/settings", "Settings"));
    output.push_str(&format!(
        "<a class=\"avatar{}\" href=\"/profile\" title=\"Profile\">{}</a>\n",
        active(current_path, "/profile"),
        avatar(user)
    ));
    output.push_str("</nav>");
    output
}

fn nav_link(current_path: &str, path: &str, label: &str) -> String {
    format!(
        "<a class=\"nav-item{}\" href=\"{}\" title=\"{}\">{}</a>\n",
        active(current_path, path),
        path,
        label,
        label
    )
}

/// The user's avatar image, or the uppercased initial when there is none.
pub(super) fn avatar(user: Option<&User>) -> String {
    match user {
        Some(User {
            avatar: Some(url), ..
        }) => format!(r#"<img src="{}" alt="User Avatar">"#, escape(url)),
        Some(user) => escape(&user.initial().unwrap_or_default()),
        None => String::new(),
    }
}

fn header() -> String {
    let views: String = SAVED_VIEWS
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let class = if i == 0 { "chip active" } else { "chip" };
            format!("<button class=\"{}\">{}</button>", class, view)
        })
        .collect();

    format!(
        r#"<header class="header">
<input class="search" type="text" placeholder="Search...">
<div class="saved-views">{}</div>
<button class="chip" title="Bookmarks">Bookmarks</button>
<button class="chip" title="Notifications">Notifications</button>
<button class="chip" title="Filter">Filter</button>
</header>"#,
        views
    )
}
