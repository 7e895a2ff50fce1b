//! Formatting helpers for presenting metrics.

/// `45048` -> `"45,048"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    format!("{value:.decimals$}")
}

/// Whole-number percentage, e.g. `"85%"`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    format!("{value:.0}%")
}

/// Signed change, e.g. `"+16%"` or `"-22%"`.
pub fn format_change(pct: i32) -> String {
    if pct > 0 {
        format!("+{pct}%")
    } else {
        format!("{pct}%")
    }
}

/// Lowercase, whitespace runs collapsed to `-`. Used for download filenames
/// and share links.
pub fn slugify(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(247), "247");
        assert_eq!(format_thousands(45_048), "45,048");
        assert_eq!(format_thousands(47_790_662), "47,790,662");
    }

    #[test]
    fn change_carries_sign() {
        assert_eq!(format_change(16), "+16%");
        assert_eq!(format_change(-22), "-22%");
        assert_eq!(format_change(0), "0%");
    }

    #[test]
    fn slug_collapses_whitespace() {
        assert_eq!(
            slugify("Managed portfolio  energy intensity"),
            "managed-portfolio-energy-intensity"
        );
        assert_eq!(slugify("Q4 2025 Sustainability Report"), "q4-2025-sustainability-report");
    }

    #[test]
    fn non_finite_values_render_placeholder() {
        assert_eq!(format_percent(f64::NAN), "—");
        assert_eq!(format_number(f64::INFINITY, 2), "—");
        assert_eq!(format_number(1.234, 2), "1.23");
    }
}
