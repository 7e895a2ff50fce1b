use std::rc::Rc;

use dioxus::prelude::*;

use crate::charts::{self, ChartKind};
use crate::components::{ChartView, StatusLine};
use crate::core::config::DashboardConfig;
use crate::core::format::{format_change, format_percent, format_thousands, slugify};
use crate::data::kpi::analytics_kpi;
use crate::data::simulated::{SimulatedSource, TimeRange};
use crate::data::{SeriesSource, Trend};
use crate::export::csv::series_to_csv;
use crate::export::{date_stamp, export_csv, run_export, ExportStatus};
use crate::state::{Selection, SelectionAction};

const PERIOD_HEADER: &str = "Period,Value";

#[component]
pub fn Analytics() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.map(|s| s()).unwrap_or_default();

    let config = use_context::<DashboardConfig>();
    let mut selection = use_context::<Signal<Selection>>();
    let status = use_signal(ExportStatus::default);
    let busy = use_signal(|| false);

    let source = use_hook(|| Rc::new(SimulatedSource::default()));
    let series = use_memo(move || source.fetch_series(&selection().demo_key()));

    let current = selection();
    let kpi = analytics_kpi(current.chart_kind, current.time_range);
    let geometry = charts::render(
        current.chart_kind,
        &series.read(),
        f64::from(kpi.target_pct),
        &config,
    );

    let change_trend = Trend::from_change(kpi.change_pct);

    let on_download = move |_| {
        let current = *selection.peek();
        let filename = format!(
            "{}-{}-{}.csv",
            slugify(current.chart_kind.title()),
            slugify(current.time_range.name()),
            date_stamp()
        );
        let csv = series_to_csv(&series.peek(), PERIOD_HEADER);
        run_export(status, busy, "Preparing CSV", export_csv(filename, csv));
    };

    rsx! {
        section { class: "page page-analytics",
            div { class: "page__header",
                h1 { {crate::t!("analytics-title")} }
            }

            div { class: "filters",
                div { class: "filters__field",
                    span { {crate::t!("analytics-chart-type")} }
                    div { class: "segmented", role: "tablist",
                        for kind in ChartKind::ALL {
                            button {
                                key: "{kind.title()}",
                                r#type: "button",
                                role: "tab",
                                aria_selected: "{kind == current.chart_kind}",
                                class: "{tab_class(kind == current.chart_kind)}",
                                onclick: move |_| {
                                    selection.set(selection().apply(SelectionAction::ChartKind(kind)));
                                },
                                span { aria_hidden: "true", "{kind.icon()} " }
                                "{kind.title()}"
                            }
                        }
                    }
                }
                label { class: "filters__field",
                    span { {crate::t!("analytics-time-range")} }
                    select {
                        value: "{current.time_range.name()}",
                        oninput: move |evt: FormEvent| {
                            let value = evt.value();
                            let range = TimeRange::ALL
                                .into_iter()
                                .find(|r| r.name() == value)
                                .unwrap_or_default();
                            selection.set(selection().apply(SelectionAction::TimeRange(range)));
                        },
                        for range in TimeRange::ALL {
                            option { key: "{range.name()}", value: "{range.name()}", "{range.name()}" }
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "button",
                    disabled: busy(),
                    onclick: on_download,
                    {crate::t!("download-csv")}
                }
            }

            div { class: "analytics__layout",
                section { class: "panel analytics__chart",
                    div { class: "panel__header",
                        h2 { "{current.chart_kind.title()}" }
                        span { class: "panel__meta", "{current.time_range.name()}" }
                    }
                    ChartView { geometry }
                }

                aside { class: "analytics__kpis",
                    div { class: "kpi",
                        span { class: "kpi__label", {crate::t!("analytics-kpi-target")} }
                        strong { class: "kpi__value", "{format_percent(f64::from(kpi.target_pct))}" }
                    }
                    div { class: "kpi",
                        span { class: "kpi__label", "{current.time_range.change_label()}" }
                        strong { class: "kpi__value {change_trend.css_modifier()}",
                            "{change_trend.arrow()} {format_change(kpi.change_pct)}"
                        }
                    }
                    div { class: "kpi",
                        span { class: "kpi__label", {crate::t!("analytics-kpi-properties")} }
                        strong { class: "kpi__value", "{format_thousands(u64::from(kpi.properties))}" }
                    }
                }
            }

            StatusLine { status: status() }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "segmented__item segmented__item--active"
    } else {
        "segmented__item"
    }
}
