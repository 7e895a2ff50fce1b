//! Pure chart geometry. Renderers map a [`Series`] to declarative shapes;
//! the components in `components::chart` turn those shapes into SVG.

mod domain;
pub use domain::ValueDomain;

pub mod magnitude;
pub mod proportion;
pub mod trend;

pub use magnitude::{Bar, BarGeometry, BarScale};
pub use proportion::RingGeometry;
pub use trend::{TrendGeometry, TrendPoint, TrendViewport};

use crate::core::config::DashboardConfig;
use crate::data::Series;

/// Which representation the analytics panel draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartKind {
    /// Share of a target reached, drawn as a ring.
    #[default]
    Proportion,
    /// Line plus filled area over time.
    Trend,
    /// One bar per period.
    Magnitude,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [Self::Proportion, Self::Trend, Self::Magnitude];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Proportion => "Emissions Breakdown",
            Self::Trend => "Trend Analysis",
            Self::Magnitude => "Portfolio Comparison",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Proportion => "◔",
            Self::Trend => "📈",
            Self::Magnitude => "📊",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartGeometry {
    Proportion(RingGeometry),
    Trend(TrendGeometry),
    Magnitude(BarGeometry),
}

/// Lay out `series` for `kind`. The proportion ring ignores the series and
/// draws `percentage` instead.
pub fn render(
    kind: ChartKind,
    series: &Series,
    percentage: f64,
    config: &DashboardConfig,
) -> ChartGeometry {
    match kind {
        ChartKind::Proportion => ChartGeometry::Proportion(proportion::ring(percentage)),
        ChartKind::Trend => ChartGeometry::Trend(trend::layout(series, config.trend_viewport)),
        ChartKind::Magnitude => ChartGeometry::Magnitude(magnitude::layout(
            &series.truncated(config.comparison_bar_cap),
            BarScale::default(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Sample;

    fn series(values: &[f64]) -> Series {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Sample::new(format!("P{i}"), *v))
            .collect()
    }

    #[test]
    fn dispatch_matches_kind() {
        let cfg = DashboardConfig::default();
        let data = series(&[3.0, 5.0, 4.0]);

        assert!(matches!(
            render(ChartKind::Proportion, &data, 85.0, &cfg),
            ChartGeometry::Proportion(ring) if ring.sweep_degrees == 306.0
        ));
        assert!(matches!(
            render(ChartKind::Trend, &data, 0.0, &cfg),
            ChartGeometry::Trend(geo) if geo.points.len() == 3
        ));
        assert!(matches!(
            render(ChartKind::Magnitude, &data, 0.0, &cfg),
            ChartGeometry::Magnitude(geo) if geo.bars.len() == 3
        ));
    }

    #[test]
    fn comparison_is_capped() {
        let cfg = DashboardConfig::default();
        let data = series(&[1.0; 30]);
        match render(ChartKind::Magnitude, &data, 0.0, &cfg) {
            ChartGeometry::Magnitude(geo) => assert_eq!(geo.bars.len(), cfg.comparison_bar_cap),
            other => panic!("unexpected geometry {other:?}"),
        }
    }

    #[test]
    fn single_sample_renders_for_every_kind() {
        let cfg = DashboardConfig::default();
        let data = series(&[42.0]);
        for kind in ChartKind::ALL {
            match render(kind, &data, 50.0, &cfg) {
                ChartGeometry::Proportion(ring) => assert!(ring.sweep_degrees.is_finite()),
                ChartGeometry::Trend(geo) => assert!(geo
                    .points
                    .iter()
                    .all(|p| p.x.is_finite() && p.y.is_finite())),
                ChartGeometry::Magnitude(geo) => {
                    assert!(geo.bars.iter().all(|b| b.fraction.is_finite()))
                }
            }
        }
    }
}
