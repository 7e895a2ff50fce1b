//! SVG and CSS rendering of chart geometry.

use dioxus::prelude::*;

use crate::charts::{Bar, BarGeometry, ChartGeometry, RingGeometry, TrendGeometry};
use crate::core::format::{format_number, format_percent};

const RING_RADIUS: f64 = 50.0;
const TREND_GRID_LINES: usize = 5;

#[component]
pub fn ChartView(geometry: ChartGeometry) -> Element {
    match geometry {
        ChartGeometry::Proportion(ring) => rsx! { RingChart { ring } },
        ChartGeometry::Trend(trend) => rsx! { TrendChart { geometry: trend } },
        ChartGeometry::Magnitude(bars) => rsx! { BarChart { geometry: bars, ticks: 0 } },
    }
}

#[component]
pub fn RingChart(ring: RingGeometry) -> Element {
    let dash = ring.dash_array(RING_RADIUS);
    let label = format_percent(ring.percentage);

    rsx! {
        div { class: "chart chart--ring",
            svg {
                class: "chart__svg",
                view_box: "0 0 120 120",
                "role": "img",
                "aria-label": "{label}",
                circle {
                    class: "chart__ring-track",
                    cx: "60",
                    cy: "60",
                    r: "{RING_RADIUS}",
                    fill: "none",
                    stroke_width: "12",
                }
                circle {
                    class: "chart__ring-value",
                    cx: "60",
                    cy: "60",
                    r: "{RING_RADIUS}",
                    fill: "none",
                    stroke_width: "12",
                    stroke_linecap: "round",
                    stroke_dasharray: "{dash}",
                    transform: "rotate(-90 60 60)",
                }
                text {
                    class: "chart__ring-label",
                    x: "60",
                    y: "66",
                    text_anchor: "middle",
                    "{label}"
                }
            }
        }
    }
}

#[component]
pub fn TrendChart(geometry: TrendGeometry) -> Element {
    let viewport = geometry.viewport;
    let line = geometry.polyline_points();
    let area = geometry.area_points();
    let grid = viewport.grid_lines(TREND_GRID_LINES);

    rsx! {
        div { class: "chart chart--trend",
            svg {
                class: "chart__svg",
                view_box: "{viewport.view_box()}",
                "preserveAspectRatio": "none",
                for (idx, y) in grid.into_iter().enumerate() {
                    line {
                        key: "{idx}",
                        class: "chart__grid",
                        x1: "0",
                        y1: "{y}",
                        x2: "{viewport.width}",
                        y2: "{y}",
                    }
                }
                if !area.is_empty() {
                    polygon { class: "chart__area", points: "{area}" }
                    polyline { class: "chart__line", points: "{line}", fill: "none" }
                }
                for (idx, point) in geometry.points.iter().enumerate() {
                    circle {
                        key: "{idx}",
                        class: "chart__point",
                        cx: "{point.x:.2}",
                        cy: "{point.y:.2}",
                        r: "3",
                        title { "{point.label}: {format_number(point.value, 0)}" }
                    }
                }
            }
        }
    }
}

/// Vertical bars. `ticks > 1` adds a value axis with that many marks.
#[component]
pub fn BarChart(geometry: BarGeometry, ticks: usize, unit: Option<String>) -> Element {
    let axis = if ticks > 1 { geometry.ticks(ticks) } else { Vec::new() };
    let unit = unit.unwrap_or_default();

    rsx! {
        div { class: "chart chart--bars",
            if !axis.is_empty() {
                div { class: "chart__axis",
                    for (idx, tick) in axis.into_iter().enumerate() {
                        span { key: "{idx}", class: "chart__tick", "{format_number(tick, 0)}" }
                    }
                }
            }
            div { class: "chart__bars",
                for (idx, bar) in geometry.bars.iter().enumerate() {
                    div {
                        key: "{idx}",
                        class: "chart__bar-slot",
                        title: "{bar.label}: {format_number(bar.value, 0)} {unit}",
                        div {
                            class: "{bar_class(bar)}",
                            style: "height: {bar.percent():.2}%",
                        }
                        span { class: "chart__bar-label", "{bar.label}" }
                    }
                }
            }
        }
    }
}

fn bar_class(bar: &Bar) -> &'static str {
    if bar.emphasized {
        "chart__bar chart__bar--emphasis"
    } else {
        "chart__bar"
    }
}

/// Horizontal bars with the value printed beside each one.
#[component]
pub fn HorizontalBars(geometry: BarGeometry, unit: String) -> Element {
    rsx! {
        div { class: "chart chart--hbars",
            for (idx, bar) in geometry.bars.iter().enumerate() {
                div { key: "{idx}", class: "chart__hbar-row",
                    span { class: "chart__hbar-label", "{bar.label}" }
                    div { class: "chart__hbar-track",
                        div { class: "chart__hbar", style: "width: {bar.percent():.2}%" }
                    }
                    span { class: "chart__hbar-value", "{format_number(bar.value, 0)} {unit}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{magnitude, proportion, trend, BarScale, TrendViewport};
    use crate::data::{Sample, Series};

    fn render_html(geometry: ChartGeometry) -> String {
        let mut dom = VirtualDom::new_with_props(ChartView, ChartViewProps { geometry });
        dom.rebuild_in_place();
        dioxus::ssr::render(&dom)
    }

    fn series(values: &[f64]) -> Series {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Sample::new(format!("Month {}", i + 1), *v))
            .collect()
    }

    #[test]
    fn ring_is_labelled_with_its_percentage() {
        let html = render_html(ChartGeometry::Proportion(proportion::ring(85.0)));
        assert!(html.contains(r#"aria-label="85%""#), "{html}");
        assert!(html.contains(r#"role="img""#));
        assert!(html.contains("stroke-dasharray"));
    }

    #[test]
    fn trend_draws_line_area_and_points() {
        let geometry = trend::layout(&series(&[10.0, 30.0, 20.0]), TrendViewport::default());
        let html = render_html(ChartGeometry::Trend(geometry));
        assert!(html.contains(r#"preserveAspectRatio="none""#));
        assert!(html.contains("<polyline"));
        assert!(html.contains("<polygon"));
        assert_eq!(html.matches("chart__point").count(), 3);
    }

    #[test]
    fn bars_mark_emphasis() {
        let geometry = magnitude::layout(
            &series(&[700.0, 300.0]),
            BarScale::with_floor(1200.0).emphasising_above(600.0),
        );
        let html = render_html(ChartGeometry::Magnitude(geometry));
        assert_eq!(html.matches("chart__bar--emphasis").count(), 1);
    }
}
