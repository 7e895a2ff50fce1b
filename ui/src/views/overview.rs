use dioxus::prelude::*;

use crate::core::format::{format_change, format_thousands};
use crate::data::overview::{brand_kit, BrandKit, MetricCard, BRAND_KITS, DEFAULT_BRAND_KIT, METRIC_CARDS};

#[component]
pub fn Overview() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.map(|s| s()).unwrap_or_default();

    let mut active_kit = use_signal(|| DEFAULT_BRAND_KIT.to_string());
    let active = brand_kit(&active_kit());

    rsx! {
        section { class: "page page-overview",
            div { class: "page__header",
                h1 { {crate::t!("overview-title")} }
                p { {crate::t!("overview-intro")} }
            }

            div { class: "metric-grid",
                for card in METRIC_CARDS {
                    MetricCardView { key: "{card.title}", card }
                }
            }

            section { class: "panel brand-kits",
                div { class: "panel__header",
                    h2 { {crate::t!("overview-brand-kits")} }
                    span { class: "panel__meta", {crate::t!("overview-brand-selected", name = active.name)} }
                }
                div { class: "brand-kits__list", role: "radiogroup",
                    for kit in BRAND_KITS {
                        button {
                            key: "{kit.id}",
                            r#type: "button",
                            role: "radio",
                            aria_checked: "{kit.id == active.id}",
                            class: "{kit_class(&kit, active.id)}",
                            onclick: move |_| active_kit.set(kit.id.to_string()),
                            span { class: "brand-kit__swatch" }
                            span { class: "brand-kit__name", "{kit.name}" }
                        }
                    }
                }
            }
        }
    }
}

fn kit_class(kit: &BrandKit, active_id: &str) -> String {
    if kit.id == active_id {
        format!("brand-kit brand-kit--active tone--{}", kit.tone)
    } else {
        format!("brand-kit tone--{}", kit.tone)
    }
}

#[component]
fn MetricCardView(card: MetricCard) -> Element {
    let trend = card.trend();

    rsx! {
        article { class: "metric-card tone--{card.tone}",
            div { class: "metric-card__top",
                span { class: "metric-card__icon", aria_hidden: "true", "{card.icon}" }
                span { class: "trend {trend.css_modifier()}",
                    "{trend.arrow()} {format_change(card.change_pct)}"
                }
            }
            h3 { class: "metric-card__title", "{card.title}" }
            p { class: "metric-card__value",
                strong { "{format_thousands(card.value)}" }
                span { class: "metric-card__unit", " {card.unit}" }
            }
        }
    }
}
