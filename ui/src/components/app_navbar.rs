use crate::core::preferences::DisplayPreference;
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform-supplied nav links.
///
/// `ui` does not know each launcher's `Route` enum, so launchers register one
/// closure per page. Each receives the localized label and returns a `Link`
/// that already contains it:
///
/// ```ignore
/// register_nav(NavBuilder {
///     overview: |label| rsx!(Link { class: "navbar__link", to: Route::Overview {}, "{label}" }),
///     // ...
/// });
/// ```
pub struct NavBuilder {
    pub overview: fn(label: &str) -> Element,
    pub emissions: fn(label: &str) -> Element,
    pub portfolio: fn(label: &str) -> Element,
    pub analytics: fn(label: &str) -> Element,
    pub reports: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let preference: Option<Signal<DisplayPreference>> = try_use_context();
    let dark_mode = preference.map(|p| p().dark_mode).unwrap_or(false);

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let on_toggle_theme = move |_| {
        if let Some(mut pref) = preference {
            let next = pref().toggled();
            pref.set(next);
        }
    };

    let internal_nav = NAV_BUILDER.get().map(|b| {
        let overview = (b.overview)(&t!("nav-overview"));
        let emissions = (b.emissions)(&t!("nav-emissions"));
        let portfolio = (b.portfolio)(&t!("nav-portfolio"));
        let analytics = (b.analytics)(&t!("nav-analytics"));
        let reports = (b.reports)(&t!("nav-reports"));

        rsx! {
            nav { class: "navbar__links",
                {overview}
                {emissions}
                {portfolio}
                {analytics}
                {reports}
            }
        }
    });

    let tagline = t!("tagline");
    let theme_label = if dark_mode {
        t!("nav-theme-light")
    } else {
        t!("nav-theme-dark")
    };
    let theme_icon = if dark_mode { "☀" } else { "☾" };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-leaf", aria_hidden: "true", "🌿" }
                        span { class: "navbar__brand-mark", "CarbonTrack" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                div { class: "navbar__actions",
                    if preference.is_some() {
                        button {
                            r#type: "button",
                            class: "navbar__theme-toggle",
                            title: "{theme_label}",
                            aria_label: "{theme_label}",
                            aria_pressed: "{dark_mode}",
                            onclick: on_toggle_theme,
                            "{theme_icon}"
                        }
                    }

                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", "{c}" }
                                    }
                                })}
                            }
                        }
                    }
                }
            }
        }
    }
}
