//! Route table.
//!
//! Maps request paths to the [`View`] they display and to the access class the
//! [`RouteGuard`] enforces. Navigation decisions live here and in [`guard`],
//! separate from page rendering.

pub mod guard;

pub use guard::*;

/// Path of the sign-in view.
pub const LOGIN_PATH: &str = "/login";
/// Where authenticated users land.
pub const DEFAULT_PROTECTED_PATH: &str = "/dashboard";
/// Entry path; an alias of [`DEFAULT_PROTECTED_PATH`].
pub const ENTRY_PATH: &str = "/";

/// A screen the dashboard can display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
    Projects,
    History,
    Apps,
    AppDetail { app_id: String },
    Settings,
    Profile,
}

/// Who may reach a route.
///
/// - `Login`: The sign-in view; pointless once authenticated
/// - `Protected`: Requires an authenticated session
/// - `Alias`: Never displayed; stands in for another path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Login,
    Protected,
    Alias(&'static str),
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Protected => "protected",
            Self::Alias(_) => "alias",
        }
    }
}

type ViewConstructor = fn(&[&str]) -> Option<View>;

/// One row of the route table.
#[derive(Clone)]
pub struct Route {
    pub pattern: &'static str,
    pub access: Access,
    construct: ViewConstructor,
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("access", &self.access)
            .finish_non_exhaustive()
    }
}

impl Route {
    fn matches<'p>(&self, path: &'p str) -> Option<Vec<&'p str>> {
        let mut params = Vec::new();
        let mut pattern = segments(self.pattern);
        let mut actual = segments(path);

        loop {
            match (pattern.next(), actual.next()) {
                (None, None) => return Some(params),
                (Some(p), Some(a)) if p.starts_with('{') && p.ends_with('}') => params.push(a),
                (Some(p), Some(a)) if p == a => {}
                _ => return None,
            }
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.trim_start_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
}

/// A path resolved against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub access: Access,
    /// `None` for aliases.
    pub view: Option<View>,
}

/// Ordered table of routes; the first matching pattern wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Add a route that displays a view.
    pub fn view(
        mut self,
        pattern: &'static str,
        access: Access,
        construct: ViewConstructor,
    ) -> Self {
        self.routes.push(Route {
            pattern,
            access,
            construct,
        });
        self
    }

    /// Add a path that stands in for `target`.
    pub fn alias(mut self, pattern: &'static str, target: &'static str) -> Self {
        self.routes.push(Route {
            pattern,
            access: Access::Alias(target),
            construct: |_| None,
        });
        self
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve a request path. Returns `None` for paths the table does not know.
    pub fn resolve(&self, path: &str) -> Option<Resolved> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        self.routes.iter().find_map(|route| {
            let params = route.matches(path)?;
            let view = match route.access {
                Access::Alias(_) => None,
                _ => Some((route.construct)(&params)?),
            };
            Some(Resolved {
                access: route.access,
                view,
            })
        })
    }

    /// Render the table as aligned text, one route per line.
    pub fn describe(&self) -> String {
        let width = self
            .routes
            .iter()
            .map(|r| r.pattern.len())
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        for route in &self.routes {
            let access = match route.access {
                Access::Alias(target) => format!("alias -> {}", target),
                other => other.as_str().to_string(),
            };
            output.push_str(&format!("{:width$}  {}\n", route.pattern, access, width = width));
        }
        output
    }
}

impl Default for RouteTable {
    /// The dashboard's routes: the login view, the entry alias and the
    /// protected pages of the navigation shell.
    fn default() -> Self {
        use Access::*;
        RouteTable::new()
            .view(LOGIN_PATH, Login, |_| Some(View::Login))
            .alias(ENTRY_PATH, DEFAULT_PROTECTED_PATH)
            .view(DEFAULT_PROTECTED_PATH, Protected, |_| Some(View::Dashboard))
            .view("/projects", Protected, |_| Some(View::Projects))
            .view("/history", Protected, |_| Some(View::History))
            .view("/apps", Protected, |_| Some(View::Apps))
            .view("/apps/{app_id}", Protected, |params| {
                params.first().map(|id| View::AppDetail {
                    app_id: id.to_string(),
                })
            })
            .view("/settings", Protected, |_| Some(View::Settings))
            .view("/profile", Protected, |_| Some(View::Profile))
    }
}
