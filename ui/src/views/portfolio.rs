use dioxus::prelude::*;

use crate::charts::{magnitude, BarScale};
use crate::components::chart::HorizontalBars;
use crate::components::{Modal, StatusLine};
use crate::core::format::{format_change, format_thousands};
use crate::data::portfolio::{
    PortfolioStat, BREAKDOWN_TOTAL, BREAKDOWN_YEAR, CARBON_BREAKDOWN, FOOTPRINT_STAT,
    PORTFOLIO_STATS,
};
use crate::export::csv::{portfolio_csv, portfolio_filename};
use crate::export::{date_stamp, export_csv, run_export, ExportStatus};

#[component]
pub fn Portfolio() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.map(|s| s()).unwrap_or_default();

    let status = use_signal(ExportStatus::default);
    let busy = use_signal(|| false);
    let mut breakdown_open = use_signal(|| false);

    let download = move |stat: PortfolioStat| {
        let filename = portfolio_filename(&stat, &date_stamp());
        run_export(status, busy, "Preparing CSV", export_csv(filename, portfolio_csv(&stat)));
    };

    rsx! {
        section { class: "page page-portfolio",
            div { class: "page__header",
                h1 { {crate::t!("portfolio-title")} }
            }

            div { class: "portfolio__stats",
                for (idx, stat) in PORTFOLIO_STATS.into_iter().enumerate() {
                    StatCard {
                        key: "{stat.title}",
                        stat,
                        busy: busy(),
                        has_breakdown: idx == FOOTPRINT_STAT,
                        on_download: move |stat| download(stat),
                        on_breakdown: move |_| breakdown_open.set(true),
                    }
                }
            }

            StatusLine { status: status() }

            if breakdown_open() {
                Modal {
                    title: crate::t!("portfolio-breakdown-title"),
                    on_close: move |_| breakdown_open.set(false),
                    BreakdownBody {
                        busy: busy(),
                        on_download: move |_| download(PORTFOLIO_STATS[FOOTPRINT_STAT]),
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(
    stat: PortfolioStat,
    busy: bool,
    has_breakdown: bool,
    on_download: EventHandler<PortfolioStat>,
    on_breakdown: EventHandler<()>,
) -> Element {
    let trend = stat.trend();
    let geometry = magnitude::layout(&stat.series(), BarScale::default());

    rsx! {
        article { class: "panel stat-card",
            div { class: "panel__header",
                h2 { class: "stat-card__title", "{stat.title}" }
                span { class: "trend {trend.css_modifier()}",
                    "{trend.arrow()} {format_change(stat.change_pct)} since {stat.baseline_year}"
                }
            }
            p { class: "stat-card__value",
                strong { "{format_thousands(stat.value)}" }
                span { class: "stat-card__unit", " {stat.unit}" }
            }
            HorizontalBars { geometry, unit: stat.unit.to_string() }
            div { class: "stat-card__actions",
                button {
                    r#type: "button",
                    class: "button",
                    disabled: busy,
                    onclick: move |_| on_download.call(stat),
                    {crate::t!("download-csv")}
                }
                if has_breakdown {
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| on_breakdown.call(()),
                        {crate::t!("portfolio-view-breakdown")}
                    }
                }
            }
        }
    }
}

#[component]
fn BreakdownBody(busy: bool, on_download: EventHandler<()>) -> Element {
    rsx! {
        p { class: "breakdown__total",
            span { {crate::t!("portfolio-breakdown-total", year = BREAKDOWN_YEAR)} }
            strong { " {format_thousands(BREAKDOWN_TOTAL)} tCO₂e" }
        }
        ul { class: "breakdown__list",
            for entry in CARBON_BREAKDOWN {
                li { key: "{entry.category}", class: "breakdown__item tone--{entry.tone}",
                    div { class: "breakdown__row",
                        span { class: "breakdown__category", "{entry.category}" }
                        span { class: "breakdown__value",
                            "{format_thousands(entry.value)} tCO₂e ({entry.percentage}%)"
                        }
                    }
                    div { class: "breakdown__track",
                        div { class: "breakdown__fill", style: "width: {entry.percentage}%" }
                    }
                }
            }
        }
        button {
            r#type: "button",
            class: "button button--primary",
            disabled: busy,
            onclick: move |_| on_download.call(()),
            {crate::t!("portfolio-breakdown-download")}
        }
    }
}
