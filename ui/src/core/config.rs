//! Static dashboard configuration. Views receive it through context so
//! tests and alternative launchers can override individual knobs.

use serde::{Deserialize, Serialize};

use crate::charts::TrendViewport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Storage key of the dark-mode flag.
    pub preference_key: String,
    pub trend_viewport: TrendViewport,
    /// Lower bound of the emissions chart's y-axis maximum.
    pub emissions_axis_floor: f64,
    /// Emissions bars above this intensity get the emphasised fill.
    pub emissions_emphasis_above: f64,
    /// Maximum bars drawn by the analytics comparison chart.
    pub comparison_bar_cap: usize,
    /// Used for share links when the host has no page origin (desktop).
    pub share_origin: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            preference_key: "darkMode".into(),
            trend_viewport: TrendViewport::default(),
            emissions_axis_floor: 1200.0,
            emissions_emphasis_above: 600.0,
            comparison_bar_cap: 12,
            share_origin: "https://app.carbontrack.com".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: DashboardConfig =
            serde_json::from_str(r#"{ "comparison_bar_cap": 6 }"#).unwrap();
        assert_eq!(cfg.comparison_bar_cap, 6);
        assert_eq!(cfg.preference_key, "darkMode");
        assert_eq!(cfg.trend_viewport, TrendViewport::default());
    }
}
