//! Data feeding the dashboard: the sample/series model, the source
//! abstraction charts read through, and the fixed catalogues behind the
//! summary views.

mod model;
pub use model::{Sample, Series};

pub mod emissions;
pub mod kpi;
pub mod overview;
pub mod portfolio;
pub mod reports;
pub mod simulated;

/// Anything that can produce a series for a selection key.
///
/// The literal tables and the simulated generator both implement this; a
/// real backend would slot in here without the renderers noticing.
pub trait SeriesSource {
    type Key;

    fn fetch_series(&self, key: &Self::Key) -> Series;
}

/// Direction of a metric's change. For emissions, up is bad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn from_change(pct: i32) -> Self {
        if pct > 0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            Self::Up => "trend--up",
            Self::Down => "trend--down",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "↗",
            Self::Down => "↘",
        }
    }
}
