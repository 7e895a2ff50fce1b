//! Demo series for the analytics panel: a per-chart base constant plus
//! uniform noise in `[-100, 100)`, floored to whole units.

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Sample, Series, SeriesSource};
use crate::charts::ChartKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    Month,
    Quarter,
    #[default]
    Year,
    All,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [Self::Month, Self::Quarter, Self::Year, Self::All];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Month => "This Month",
            Self::Quarter => "This Quarter",
            Self::Year => "This Year",
            Self::All => "All Time",
        }
    }

    pub fn period_count(&self) -> usize {
        match self {
            Self::Month => 30,
            Self::Quarter => 12,
            Self::Year => 12,
            Self::All => 60,
        }
    }

    /// Label of the zero-based period `index`.
    pub fn period_label(&self, index: usize) -> String {
        let n = index + 1;
        match self {
            Self::Month => format!("Day {n}"),
            Self::Quarter => format!("Week {n}"),
            Self::Year => format!("Month {n}"),
            Self::All => format!("Period {n}"),
        }
    }

    pub fn change_label(&self) -> &'static str {
        match self {
            Self::Month => "MoM Change",
            Self::Quarter => "QoQ Change",
            Self::Year => "YoY Change",
            Self::All => "Total Change",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DemoKey {
    pub kind: ChartKind,
    pub range: TimeRange,
}

pub const NOISE_AMPLITUDE: f64 = 100.0;

pub fn base_value(kind: ChartKind, range: TimeRange) -> f64 {
    let [month, quarter, year, all] = match kind {
        ChartKind::Proportion => [120.0, 350.0, 1200.0, 5000.0],
        ChartKind::Trend => [95.0, 280.0, 980.0, 4200.0],
        ChartKind::Magnitude => [85.0, 240.0, 850.0, 3800.0],
    };
    match range {
        TimeRange::Month => month,
        TimeRange::Quarter => quarter,
        TimeRange::Year => year,
        TimeRange::All => all,
    }
}

pub fn simulate_series<R: Rng + ?Sized>(key: &DemoKey, rng: &mut R) -> Series {
    let base = base_value(key.kind, key.range);
    (0..key.range.period_count())
        .map(|idx| {
            let noise = rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE);
            Sample::new(key.range.period_label(idx), (base + noise).floor())
        })
        .collect()
}

/// Random source backed by a [`StdRng`]. Seed it for reproducible output.
#[derive(Debug)]
pub struct SimulatedSource {
    rng: RefCell<StdRng>,
}

impl SimulatedSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SeriesSource for SimulatedSource {
    type Key = DemoKey;

    fn fetch_series(&self, key: &DemoKey) -> Series {
        simulate_series(key, &mut *self.rng.borrow_mut())
    }
}
