//! Root wrapper every launcher mounts its router inside. It owns the
//! dashboard-wide context: config, selection, and the persisted display
//! preference.

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::config::DashboardConfig;
use crate::core::platform::{self, Platform};
use crate::core::preferences::{DisplayPreference, PreferenceSync};
use crate::core::storage::LocalStore;
use crate::state::Selection;

#[component]
pub fn DashboardRoot(config: Option<DashboardConfig>, children: Element) -> Element {
    let config = use_context_provider(move || config.unwrap_or_default());

    let preference = use_signal({
        let key = config.preference_key.clone();
        move || DisplayPreference::load(&LocalStore, &key, platform::prefers_dark_scheme)
    });
    use_context_provider(|| preference);

    let selection = use_signal(Selection::default);
    use_context_provider(|| selection);

    let mut sync = use_signal(move || PreferenceSync::new(*preference.peek()));
    let key = config.preference_key.clone();
    use_effect(move || {
        let current = preference();
        match sync.write().sync(current, &LocalStore, &key) {
            Some(Ok(())) => info!(dark_mode = current.dark_mode, "display preference saved"),
            Some(Err(err)) => warn!(%err, "display preference not saved"),
            None => {}
        }
    });

    use_hook(|| info!(platform = Platform::current().as_str(), "dashboard mounted"));

    rsx! {
        div { class: "{preference().root_class()}",
            {children}
        }
    }
}
