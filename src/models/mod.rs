//! Domain models for Hexboard.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! - [`Session`]: The in-memory record of whether a user is signed in and which
//!   [`User`] is active. It is the only stateful entity; see [`crate::auth`] for
//!   the store that owns it.
//!
//! ## Sample Data
//!
//! Everything else the dashboard displays is immutable literal data owned by the
//! page that renders it:
//!
//! - [`Stat`]: Headline figures on the dashboard.
//! - [`Project`]: Entries on the projects page.
//! - [`Activity`]: Entries on the activity history page.
//! - [`AppTile`]: Integrated applications on the app launcher.
//! - [`SettingsSection`]: Groups of preferences on the settings page.
//! - [`ProfileDetails`]: Static contact details shown next to the signed-in user.

mod app;
mod history;
mod profile;
mod project;
mod session;
mod settings;
mod stat;

pub use app::*;
pub use history::*;
pub use profile::*;
pub use project::*;
pub use session::*;
pub use settings::*;
pub use stat::*;
