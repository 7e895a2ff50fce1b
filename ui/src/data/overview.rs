//! Summary cards and brand kits on the overview page.

use super::Trend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: u64,
    pub unit: &'static str,
    pub change_pct: i32,
    pub icon: &'static str,
    pub tone: &'static str,
}

impl MetricCard {
    pub fn trend(&self) -> Trend {
        Trend::from_change(self.change_pct)
    }
}

pub const METRIC_CARDS: [MetricCard; 4] = [
    MetricCard {
        title: "Total Emissions",
        value: 45_048,
        unit: "tCO₂e",
        change_pct: 16,
        icon: "📊",
        tone: "red",
    },
    MetricCard {
        title: "Energy Intensity",
        value: 123,
        unit: "kWh/m²",
        change_pct: -22,
        icon: "📉",
        tone: "green",
    },
    MetricCard {
        title: "Carbon Saved",
        value: 12_450,
        unit: "tCO₂e",
        change_pct: 34,
        icon: "🍃",
        tone: "emerald",
    },
    MetricCard {
        title: "Buildings Tracked",
        value: 247,
        unit: "properties",
        change_pct: 8,
        icon: "🏢",
        tone: "blue",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandKit {
    pub id: &'static str,
    pub name: &'static str,
    pub tone: &'static str,
}

pub const BRAND_KITS: [BrandKit; 3] = [
    BrandKit {
        id: "ecorp",
        name: "ECorp",
        tone: "emerald",
    },
    BrandKit {
        id: "icorp",
        name: "ICorp",
        tone: "orange",
    },
    BrandKit {
        id: "the-agency",
        name: "The Agency",
        tone: "red",
    },
];

pub const DEFAULT_BRAND_KIT: &str = "the-agency";

/// Resolve a kit id, falling back to the default kit.
pub fn brand_kit(id: &str) -> BrandKit {
    let by_id = |wanted: &str| BRAND_KITS.iter().find(|k| k.id == wanted).copied();
    by_id(id)
        .or_else(|| by_id(DEFAULT_BRAND_KIT))
        .unwrap_or(BRAND_KITS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_intensity_trends_down() {
        assert_eq!(METRIC_CARDS[1].trend(), Trend::Down);
        assert_eq!(METRIC_CARDS[0].trend(), Trend::Up);
    }

    #[test]
    fn unknown_kit_resolves_to_default() {
        assert_eq!(brand_kit("icorp").name, "ICorp");
        assert_eq!(brand_kit("acme").id, DEFAULT_BRAND_KIT);
    }
}
