use dioxus::prelude::*;
use tracing::Level;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Analytics, Emissions, Overview, Portfolio, Reports};
use ui::DashboardRoot;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Overview {},
    #[route("/emissions")]
    Emissions {},
    #[route("/portfolio")]
    Portfolio {},
    #[route("/analytics")]
    Analytics {},
    #[route("/reports")]
    Reports {},
}

fn nav_overview(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Overview {},
        "{label}"
    })
}
fn nav_emissions(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Emissions {},
        "{label}"
    })
}
fn nav_portfolio(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Portfolio {},
        "{label}"
    })
}
fn nav_analytics(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Analytics {},
        "{label}"
    })
}
fn nav_reports(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Reports {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger init failed: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            overview: nav_overview,
            emissions: nav_emissions,
            portfolio: nav_portfolio,
            analytics: nav_analytics,
            reports: nav_reports,
        });
    }

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        DashboardRoot {
            div {
                key: "{lang_code()}",
                Router::<Route> {}
            }
        }
    }
}

/// Web router layout around the shared navbar.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
