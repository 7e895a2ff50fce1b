//! Local stand-ins for generated report files.

use crate::core::format::slugify;
use crate::data::reports::ReportEntry;

pub fn report_filename(entry: &ReportEntry) -> String {
    format!("{}-{}.txt", slugify(entry.name), entry.last_generated)
}

pub fn report_document(entry: &ReportEntry) -> String {
    format!(
        "{}\nGenerated: {}\nSize: {}\nFormat: {}\n\nThis is a sample report download.\n",
        entry.name, entry.last_generated, entry.size, entry.format
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::reports::{report, ReportKind};

    #[test]
    fn filename_combines_slug_and_date() {
        assert_eq!(
            report_filename(&report(ReportKind::Quarterly)),
            "quarterly-sustainability-report-2024-01-01.txt"
        );
    }

    #[test]
    fn document_lists_metadata() {
        let doc = report_document(&report(ReportKind::Custom));
        assert!(doc.starts_with("Custom Data Export\nGenerated: 2024-01-10\n"));
        assert!(doc.contains("Format: CSV/Excel"));
    }
}
