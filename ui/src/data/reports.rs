//! Report catalogue and the simulated share/email flows.
//!
//! Nothing here leaves the client: "sending" an email only validates the
//! form and produces the confirmation the UI shows.

use thiserror::Error;

use crate::core::format::slugify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportKind {
    #[default]
    Monthly,
    Quarterly,
    Annual,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportEntry {
    pub kind: ReportKind,
    pub name: &'static str,
    pub description: &'static str,
    pub last_generated: &'static str,
    pub size: &'static str,
    pub format: &'static str,
}

pub const REPORTS: [ReportEntry; 4] = [
    ReportEntry {
        kind: ReportKind::Monthly,
        name: "Monthly Carbon Report",
        description: "Comprehensive monthly analysis of carbon emissions and energy consumption",
        last_generated: "2024-01-15",
        size: "2.4 MB",
        format: "PDF",
    },
    ReportEntry {
        kind: ReportKind::Quarterly,
        name: "Quarterly Sustainability Report",
        description: "Detailed quarterly review with trend analysis and recommendations",
        last_generated: "2024-01-01",
        size: "5.8 MB",
        format: "PDF",
    },
    ReportEntry {
        kind: ReportKind::Annual,
        name: "Annual ESG Report",
        description: "Complete annual environmental, social, and governance report",
        last_generated: "2024-12-31",
        size: "12.3 MB",
        format: "PDF",
    },
    ReportEntry {
        kind: ReportKind::Custom,
        name: "Custom Data Export",
        description: "Export specific data ranges and metrics in various formats",
        last_generated: "2024-01-10",
        size: "1.2 MB",
        format: "CSV/Excel",
    },
];

pub fn report(kind: ReportKind) -> ReportEntry {
    REPORTS
        .iter()
        .find(|r| r.kind == kind)
        .copied()
        .unwrap_or(REPORTS[0])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentReport {
    pub name: &'static str,
    pub date: &'static str,
    pub status: &'static str,
    /// Catalogue entry its download button fetches.
    pub source: ReportKind,
}

pub const RECENT_REPORTS: [RecentReport; 4] = [
    RecentReport {
        name: "May 2025 Carbon Report",
        date: "2025-05-05",
        status: "Ready",
        source: ReportKind::Monthly,
    },
    RecentReport {
        name: "Q4 2025 Sustainability Report",
        date: "2025-05-12",
        status: "Ready",
        source: ReportKind::Monthly,
    },
    RecentReport {
        name: "April 2025 Carbon Report",
        date: "2025-04-04",
        status: "Ready",
        source: ReportKind::Monthly,
    },
    RecentReport {
        name: "Q3 2025 Sustainability Report",
        date: "2025-04-10",
        status: "Ready",
        source: ReportKind::Monthly,
    },
];

pub fn share_link(origin: &str, report_name: &str) -> String {
    format!(
        "{}/reports/shared/{}",
        origin.trim_end_matches('/'),
        slugify(report_name)
    )
}

pub fn generation_notice(entry: &ReportEntry) -> String {
    format!("Generating {}... This may take a few minutes.", entry.name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmailSchedule {
    #[default]
    Once,
    Weekly,
    Monthly,
    Quarterly,
}

impl EmailSchedule {
    pub const ALL: [EmailSchedule; 4] = [Self::Once, Self::Weekly, Self::Monthly, Self::Quarterly];

    pub fn value(&self) -> &'static str {
        match self {
            Self::Once => "once",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Once => "Send Once",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
        }
    }

    pub fn from_value(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.value() == raw)
            .unwrap_or_default()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailFormError {
    #[error("add at least one recipient")]
    NoRecipients,
    #[error("`{0}` is not an email address")]
    InvalidRecipient(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailForm {
    pub recipients: String,
    pub subject: String,
    pub message: String,
    pub schedule: EmailSchedule,
}

impl EmailForm {
    /// Comma-separated recipients, trimmed, empties dropped.
    pub fn recipient_list(&self) -> Result<Vec<String>, EmailFormError> {
        let recipients: Vec<String> = self
            .recipients
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(String::from)
            .collect();

        if recipients.is_empty() {
            return Err(EmailFormError::NoRecipients);
        }
        if let Some(bad) = recipients.iter().find(|r| !looks_like_email(r)) {
            return Err(EmailFormError::InvalidRecipient(bad.clone()));
        }
        Ok(recipients)
    }

    /// Validate and return the confirmation shown to the user.
    pub fn schedule_send(&self) -> Result<String, EmailFormError> {
        let recipients = self.recipient_list()?;
        Ok(format!(
            "Email scheduled ({}) to be sent to: {}",
            self.schedule.label().to_lowercase(),
            recipients.join(", ")
        ))
    }
}

fn looks_like_email(raw: &str) -> bool {
    match raw.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}
