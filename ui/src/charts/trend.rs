//! Line-and-area chart geometry.
//!
//! Index maps linearly onto `[0, width]`. Value is normalised against the
//! series' own min/max and mapped onto a band of `amplitude` units that
//! sits on the bottom edge, so the highest sample is drawn at
//! `height - amplitude` and the lowest on the baseline.

use serde::{Deserialize, Serialize};

use super::ValueDomain;
use crate::data::Series;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendViewport {
    pub width: f64,
    pub height: f64,
    pub amplitude: f64,
}

impl Default for TrendViewport {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 200.0,
            amplitude: 160.0,
        }
    }
}

impl TrendViewport {
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Evenly spaced horizontal grid line offsets, top edge included.
    pub fn grid_lines(&self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        let step = self.height / count as f64;
        (0..count).map(|i| i as f64 * step).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendGeometry {
    pub viewport: TrendViewport,
    pub points: Vec<TrendPoint>,
}

pub fn layout(series: &Series, viewport: TrendViewport) -> TrendGeometry {
    let domain = ValueDomain::of(series).unwrap_or(ValueDomain { min: 0.0, max: 0.0 });
    let last_index = series.len().saturating_sub(1);

    let points = series
        .iter()
        .enumerate()
        .map(|(idx, sample)| {
            let x = if last_index == 0 {
                0.0
            } else {
                idx as f64 / last_index as f64 * viewport.width
            };
            let y = viewport.height - domain.normalize(sample.value) * viewport.amplitude;
            TrendPoint {
                x,
                y,
                label: sample.label.clone(),
                value: sample.value,
            }
        })
        .collect();

    TrendGeometry { viewport, points }
}

fn coord(x: f64, y: f64) -> String {
    format!("{x:.2},{y:.2}")
}

impl TrendGeometry {
    /// `points` attribute of the data polyline. A lone sample is stretched
    /// into a flat line across the full width.
    pub fn polyline_points(&self) -> String {
        match self.points.as_slice() {
            [] => String::new(),
            [only] => format!(
                "{} {}",
                coord(0.0, only.y),
                coord(self.viewport.width, only.y)
            ),
            points => points
                .iter()
                .map(|p| coord(p.x, p.y))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// `points` attribute of the filled area: baseline corners wrapped around
    /// the polyline.
    pub fn area_points(&self) -> String {
        let line = self.polyline_points();
        if line.is_empty() {
            return line;
        }
        format!(
            "{} {line} {}",
            coord(0.0, self.viewport.height),
            coord(self.viewport.width, self.viewport.height)
        )
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
            .map(|(i, v)| Sample::new(format!("Month {}", i + 1), *v))
            .collect()
    }

    #[test]
    fn x_spans_exactly_zero_to_width() {
        let viewport = TrendViewport::default();
        for len in 2..40 {
            let values: Vec<f64> = (0..len).map(|i| (i * 7 % 5) as f64).collect();
            let geo = layout(&series(&values), viewport);
            assert_eq!(geo.points.first().unwrap().x, 0.0);
            assert_eq!(geo.points.last().unwrap().x, viewport.width);
        }
    }

    #[test]
    fn extremes_land_on_band_edges() {
        let geo = layout(&series(&[100.0, 300.0, 200.0]), TrendViewport::default());
        assert_eq!(geo.points[0].y, 200.0);
        assert_eq!(geo.points[1].y, 40.0);
        assert_eq!(geo.points[2].y, 120.0);
    }

    #[test]
    fn single_sample_is_flat_and_finite() {
        let geo = layout(&series(&[5.0]), TrendViewport::default());
        assert_eq!(geo.points.len(), 1);
        assert_eq!(geo.points[0].x, 0.0);
        assert_eq!(geo.points[0].y, 200.0);
        assert_eq!(geo.polyline_points(), "0.00,200.00 400.00,200.00");
        assert!(!geo.area_points().contains("NaN"));
    }

    #[test]
    fn constant_series_draws_on_baseline() {
        let geo = layout(&series(&[9.0, 9.0, 9.0]), TrendViewport::default());
        assert!(geo.points.iter().all(|p| p.y == 200.0));
    }

    #[test]
    fn empty_series_has_no_paths() {
        let geo = layout(&Series::default(), TrendViewport::default());
        assert!(geo.points.is_empty());
        assert_eq!(geo.polyline_points(), "");
        assert_eq!(geo.area_points(), "");
    }

    #[test]
    fn area_wraps_polyline_with_baseline_corners() {
        let geo = layout(&series(&[1.0, 2.0]), TrendViewport::default());
        assert_eq!(
            geo.area_points(),
            "0.00,200.00 0.00,200.00 400.00,40.00 400.00,200.00"
        );
    }

    #[test]
    fn grid_lines_are_evenly_spaced() {
        assert_eq!(
            TrendViewport::default().grid_lines(5),
            vec![0.0, 40.0, 80.0, 120.0, 160.0]
        );
    }
}
