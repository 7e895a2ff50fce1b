//! Managed-portfolio statistics and the scope breakdown of its footprint.

use super::{Sample, Series, Trend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioStat {
    pub title: &'static str,
    pub value: u64,
    pub unit: &'static str,
    pub change_pct: i32,
    pub baseline_year: &'static str,
    pub yearly: &'static [(&'static str, u64)],
}

impl PortfolioStat {
    pub fn trend(&self) -> Trend {
        Trend::from_change(self.change_pct)
    }

    pub fn series(&self) -> Series {
        self.yearly
            .iter()
            .map(|(year, value)| Sample::new(*year, *value as f64))
            .collect()
    }
}

pub const PORTFOLIO_STATS: [PortfolioStat; 3] = [
    PortfolioStat {
        title: "Managed portfolio carbon footprint",
        value: 45_048,
        unit: "tCO₂e",
        change_pct: 16,
        baseline_year: "2019",
        yearly: &[
            ("2019", 38_673),
            ("2020", 32_813),
            ("2021", 14_111),
            ("2022", 45_048),
        ],
    },
    PortfolioStat {
        title: "Managed portfolio energy intensity",
        value: 123,
        unit: "kWh/m²",
        change_pct: -22,
        baseline_year: "2019",
        yearly: &[("2019", 157), ("2020", 135), ("2021", 128), ("2022", 123)],
    },
    PortfolioStat {
        title: "Managed portfolio energy consumption",
        value: 47_790_662,
        unit: "kWh",
        change_pct: -27,
        baseline_year: "2019",
        yearly: &[
            ("2019", 65_198_706),
            ("2020", 48_784_205),
            ("2021", 49_324_077),
            ("2022", 47_790_662),
        ],
    },
];

/// Index of the stat whose card opens the breakdown instead of downloading.
pub const FOOTPRINT_STAT: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakdownEntry {
    pub category: &'static str,
    pub value: u64,
    pub percentage: u8,
    pub tone: &'static str,
}

pub const BREAKDOWN_TOTAL: u64 = 45_048;
pub const BREAKDOWN_YEAR: &str = "2022";

pub const CARBON_BREAKDOWN: [BreakdownEntry; 3] = [
    BreakdownEntry {
        category: "Scope 1 - Direct Emissions",
        value: 12_450,
        percentage: 28,
        tone: "red",
    },
    BreakdownEntry {
        category: "Scope 2 - Electricity",
        value: 18_920,
        percentage: 42,
        tone: "orange",
    },
    BreakdownEntry {
        category: "Scope 3 - Indirect",
        value: 13_678,
        percentage: 30,
        tone: "yellow",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_adds_up() {
        let pct: u32 = CARBON_BREAKDOWN.iter().map(|e| e.percentage as u32).sum();
        let total: u64 = CARBON_BREAKDOWN.iter().map(|e| e.value).sum();
        assert_eq!(pct, 100);
        assert_eq!(total, BREAKDOWN_TOTAL);
    }

    #[test]
    fn headline_value_is_latest_year() {
        for stat in PORTFOLIO_STATS {
            let latest = stat.yearly.last().map(|(_, v)| *v);
            assert_eq!(latest, Some(stat.value), "{}", stat.title);
        }
    }

    #[test]
    fn series_preserves_years() {
        let series = PORTFOLIO_STATS[1].series();
        assert_eq!(series.len(), 4);
        assert_eq!(series.samples()[0], Sample::new("2019", 157.0));
    }
}
