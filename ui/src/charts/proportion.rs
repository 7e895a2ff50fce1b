//! Ring chart for a single percentage.

use std::f64::consts::PI;

pub const DEGREES_PER_PERCENT: f64 = 3.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub percentage: f64,
    pub sweep_degrees: f64,
}

pub fn ring(percentage: f64) -> RingGeometry {
    let percentage = if percentage.is_finite() {
        percentage.clamp(0.0, 100.0)
    } else {
        0.0
    };
    RingGeometry {
        percentage,
        sweep_degrees: percentage * DEGREES_PER_PERCENT,
    }
}

impl RingGeometry {
    /// `stroke-dasharray` for a circle of `radius` so the stroke covers the
    /// sweep and leaves the rest as a gap.
    pub fn dash_array(&self, radius: f64) -> String {
        let circumference = 2.0 * PI * radius;
        let filled = circumference * self.sweep_degrees / 360.0;
        format!("{filled:.2} {:.2}", circumference - filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_is_three_point_six_per_percent() {
        assert_eq!(ring(0.0).sweep_degrees, 0.0);
        assert_eq!(ring(50.0).sweep_degrees, 180.0);
        assert_eq!(ring(100.0).sweep_degrees, 360.0);
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(ring(140.0).sweep_degrees, 360.0);
        assert_eq!(ring(-5.0).sweep_degrees, 0.0);
        assert_eq!(ring(f64::NAN).sweep_degrees, 0.0);
    }

    #[test]
    fn dash_array_splits_circumference() {
        let dash = ring(50.0).dash_array(10.0);
        let parts: Vec<f64> = dash.split(' ').map(|p| p.parse().unwrap()).collect();
        assert!((parts[0] - parts[1]).abs() < 0.02);
        assert!((parts[0] + parts[1] - 2.0 * PI * 10.0).abs() < 0.02);
    }
}
