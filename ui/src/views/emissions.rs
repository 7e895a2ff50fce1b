use dioxus::prelude::*;

use crate::charts::{magnitude, BarScale};
use crate::components::chart::BarChart;
use crate::components::StatusLine;
use crate::core::config::DashboardConfig;
use crate::data::emissions::{Category, EmissionsTables, Status, TimeGrouping, UNIT};
use crate::data::SeriesSource;
use crate::export::csv::{series_to_csv, SERIES_HEADER};
use crate::export::{export_csv, run_export, ExportStatus};
use crate::state::{Selection, SelectionAction};

const FILENAME: &str = "emissions-data.csv";
const AXIS_TICKS: usize = 5;

#[component]
pub fn Emissions() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.map(|s| s()).unwrap_or_default();

    let config = use_context::<DashboardConfig>();
    let mut selection = use_context::<Signal<Selection>>();
    let status = use_signal(ExportStatus::default);
    let busy = use_signal(|| false);

    let current = selection();
    let series = EmissionsTables::today().fetch_series(&current.emissions_key());
    let scale = BarScale::with_floor(config.emissions_axis_floor)
        .emphasising_above(config.emissions_emphasis_above);
    let geometry = magnitude::layout(&series, scale);

    #[cfg(debug_assertions)]
    tracing::debug!(key = ?current.emissions_key(), samples = series.len(), "emissions render");

    let on_download = {
        let csv = series_to_csv(&series, SERIES_HEADER);
        move |_| run_export(status, busy, "Preparing CSV", export_csv(FILENAME.to_string(), csv.clone()))
    };

    rsx! {
        section { class: "page page-emissions",
            div { class: "page__header",
                h1 { {crate::t!("emissions-title")} }
                p { class: "page__meta", "{UNIT}" }
            }

            div { class: "filters",
                label { class: "filters__field",
                    span { {crate::t!("emissions-filter-category")} }
                    select {
                        value: "{current.category.label()}",
                        oninput: move |evt: FormEvent| {
                            selection.set(selection().apply(SelectionAction::category(&evt.value())));
                        },
                        for category in Category::ALL {
                            option { key: "{category.label()}", value: "{category.label()}", "{category.label()}" }
                        }
                    }
                }
                label { class: "filters__field",
                    span { {crate::t!("emissions-filter-status")} }
                    select {
                        value: "{current.status.label()}",
                        oninput: move |evt: FormEvent| {
                            selection.set(selection().apply(SelectionAction::status(&evt.value())));
                        },
                        for choice in Status::ALL {
                            option { key: "{choice.label()}", value: "{choice.label()}", "{choice.label()}" }
                        }
                    }
                }
                label { class: "filters__field",
                    span { {crate::t!("emissions-filter-grouping")} }
                    select {
                        value: "{current.grouping.label()}",
                        oninput: move |evt: FormEvent| {
                            selection.set(selection().apply(SelectionAction::grouping(&evt.value())));
                        },
                        for grouping in TimeGrouping::ALL {
                            option { key: "{grouping.label()}", value: "{grouping.label()}", "{grouping.label()}" }
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy(),
                    onclick: on_download,
                    {crate::t!("download-csv")}
                }
            }

            section { class: "panel",
                BarChart { geometry, ticks: AXIS_TICKS, unit: UNIT.to_string() }
                StatusLine { status: status() }
            }
        }
    }
}
