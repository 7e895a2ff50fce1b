#![cfg(test)]
/*!
Selectors the shared components render must stay present in the unified theme
(`ui/assets/theme/main.css`), which the desktop build embeds. A substring check
is enough to catch a rename in one place but not the other.

When a component's class names change, update this list alongside it.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".app {",
    ".app--dark",
    ".page {",
    ".panel {",
    ".panel__header",
    // Buttons & controls
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".filters",
    ".segmented__item--active",
    ".status-line--success",
    ".status-line--error",
    // Trends
    ".trend--up",
    ".trend--down",
    // Overview
    ".metric-card",
    ".metric-card__value",
    ".brand-kit--active",
    // Charts
    ".chart__ring-value",
    ".chart__line",
    ".chart__area",
    ".chart__point",
    ".chart__bar {",
    ".chart__bar--emphasis",
    ".chart__axis",
    ".chart__hbar",
    // Portfolio & breakdown
    ".stat-card__actions",
    ".breakdown__fill",
    // Analytics
    ".analytics__layout",
    ".kpi__value",
    // Reports
    ".report-card",
    ".reports__recent-item",
    ".email-form__field",
    // Modal
    ".modal__backdrop",
    ".modal__close",
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}

#[test]
fn dark_theme_overrides_the_palette() {
    let dark = THEME_CSS
        .split(".app--dark {")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .unwrap_or_default();
    for token in ["--color-bg", "--color-surface", "--color-text"] {
        assert!(dark.contains(token), "dark palette does not override `{token}`");
    }
}
