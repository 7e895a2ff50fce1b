//! Localisation for `carbontrack-ui`.
//!
//! Fluent bundles live under `i18n/<locale>/carbontrack_ui.ftl` and are
//! embedded at compile time; `en-US` is the fallback every other locale must
//! cover (see `tests/i18n_missing_keys.rs`).
//!
//! ```ignore
//! ui::i18n::init(); // idempotent
//! let label = ui::t!("nav-overview");
//! ```
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// `t!("key")` or `t!("key", name = value)`, looked up through [`LOADER`].
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; also the FTL filename in every locale folder. `fl!` derives
/// it from the package name with `-` replaced by `_`.
const DOMAIN: &str = "carbontrack_ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "language selection failed; using fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == "en-US"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        set_language("en-US").unwrap();
        assert_eq!(fl!(&*LOADER, "nav-overview"), "Overview");
        assert_eq!(fl!(&*LOADER, "nav-reports"), "Reports");
    }

    #[test]
    fn domain_file_is_embedded_for_every_locale() {
        assert_eq!(DOMAIN, env!("CARGO_PKG_NAME").replace('-', "_"));
        for code in available_languages() {
            let path = format!("{code}/{DOMAIN}.ftl");
            assert!(Localizations::get(&path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn all_three_locales_are_embedded() {
        let langs = available_languages();
        for code in ["en-US", "es-ES", "fr-FR"] {
            assert!(langs.iter().any(|l| l == code), "missing {code}");
        }
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        let before = fl!(&*LOADER, "nav-emissions");
        let _ = set_language("not a tag");
        let after = fl!(&*LOADER, "nav-emissions");
        assert_eq!(before, after);
    }
}
