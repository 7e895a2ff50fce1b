//! Shared UI crate for CarbonTrack. Data, chart geometry, exports and every
//! view live here; the `web` and `desktop` crates only add a router.

pub mod charts;
pub mod core;
pub mod data;
pub mod export;
pub mod i18n;
pub mod state;
pub mod views;

mod shell;
pub use shell::DashboardRoot;

pub mod components {
    pub mod app_navbar;
    pub mod chart;
    pub mod modal;
    pub mod status;

    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
    pub use chart::ChartView;
    pub use modal::Modal;
    pub use status::StatusLine;
}

use dioxus::prelude::*;

/// Shared theme for the web launcher; desktop embeds the same file inline.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
