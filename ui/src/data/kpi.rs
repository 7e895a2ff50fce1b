//! Headline figures shown beside the analytics chart.

use super::simulated::TimeRange;
use crate::charts::ChartKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsKpi {
    /// Share of the reduction target reached, in percent.
    pub target_pct: u8,
    pub change_pct: i32,
    pub properties: u32,
}

const PROPERTIES: u32 = 247;

const fn kpi(target_pct: u8, change_pct: i32) -> AnalyticsKpi {
    AnalyticsKpi {
        target_pct,
        change_pct,
        properties: PROPERTIES,
    }
}

pub fn analytics_kpi(kind: ChartKind, range: TimeRange) -> AnalyticsKpi {
    match (kind, range) {
        (ChartKind::Proportion, TimeRange::Month) => kpi(95, -8),
        (ChartKind::Proportion, TimeRange::Quarter) => kpi(88, -15),
        (ChartKind::Proportion, TimeRange::Year) => kpi(85, -22),
        (ChartKind::Proportion, TimeRange::All) => kpi(82, -28),
        (ChartKind::Trend, TimeRange::Month) => kpi(92, -5),
        (ChartKind::Trend, TimeRange::Quarter) => kpi(89, -12),
        (ChartKind::Trend, TimeRange::Year) => kpi(87, -18),
        (ChartKind::Trend, TimeRange::All) => kpi(84, -25),
        (ChartKind::Magnitude, TimeRange::Month) => kpi(90, -3),
        (ChartKind::Magnitude, TimeRange::Quarter) => kpi(86, -10),
        (ChartKind::Magnitude, TimeRange::Year) => kpi(83, -20),
        (ChartKind::Magnitude, TimeRange::All) => kpi(80, -30),
    }
}
