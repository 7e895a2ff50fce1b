//! Bar heights as a fraction of the series maximum.

use crate::data::Series;

/// How bar fractions are scaled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarScale {
    /// The axis maximum is never below this.
    pub floor: f64,
    /// Bars strictly above this value are flagged for emphasis.
    pub emphasis_above: Option<f64>,
}

impl BarScale {
    pub fn with_floor(floor: f64) -> Self {
        Self {
            floor,
            ..Self::default()
        }
    }

    pub fn emphasising_above(mut self, threshold: f64) -> Self {
        self.emphasis_above = Some(threshold);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// In `[0, 1]`.
    pub fraction: f64,
    pub emphasized: bool,
}

impl Bar {
    pub fn percent(&self) -> f64 {
        self.fraction * 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub axis_max: f64,
    pub bars: Vec<Bar>,
}

pub fn layout(series: &Series, scale: BarScale) -> BarGeometry {
    let axis_max = series.max().unwrap_or(0.0).max(scale.floor);

    let bars = series
        .iter()
        .map(|sample| Bar {
            label: sample.label.clone(),
            value: sample.value,
            fraction: bar_fraction(sample.value, axis_max),
            emphasized: scale
                .emphasis_above
                .is_some_and(|threshold| sample.value > threshold),
        })
        .collect();

    BarGeometry { axis_max, bars }
}

/// `+inf` fills the bar, NaN and `-inf` leave it empty.
fn bar_fraction(value: f64, axis_max: f64) -> f64 {
    if value == f64::INFINITY {
        1.0
    } else if axis_max > 0.0 && value.is_finite() {
        (value / axis_max).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

impl BarGeometry {
    /// Evenly spaced axis tick values from `axis_max` down to zero.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![self.axis_max];
        }
        let step = self.axis_max / (count - 1) as f64;
        (0..count).rev().map(|i| i as f64 * step).collect()
    }
}
