//! Embodied-carbon intensity tables (kgCO₂e/m²) and their time groupings.
//!
//! Every category currently shares the same two tables; the per-category
//! match stays so the tables can diverge without touching callers.

use time::{Date, OffsetDateTime};

use super::{Sample, Series, SeriesSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Refurbishment,
    NewBuild,
    #[default]
    All,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Refurbishment, Self::NewBuild, Self::All];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Refurbishment => "Refurbishment",
            Self::NewBuild => "New build",
            Self::All => "All",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Complete,
    Estimate,
}

impl Status {
    pub const ALL: [Status; 2] = [Self::Complete, Self::Estimate];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::Estimate => "Estimate",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeGrouping {
    Monthly,
    Quarterly,
    #[default]
    Yearly,
}

impl TimeGrouping {
    pub const ALL: [TimeGrouping; 3] = [Self::Monthly, Self::Quarterly, Self::Yearly];

    const MONTH_WINDOW: usize = 12;
    const QUARTER_STRIDE: usize = 3;
    const QUARTER_WINDOW: usize = 8;

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.label() == raw)
    }

    /// Number of samples this grouping yields from a table of `table_len`
    /// yearly rows.
    pub fn expected_len(&self, table_len: usize) -> usize {
        match self {
            Self::Yearly => table_len,
            Self::Monthly => table_len.min(Self::MONTH_WINDOW),
            Self::Quarterly => table_len
                .div_ceil(Self::QUARTER_STRIDE)
                .min(Self::QUARTER_WINDOW),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SeriesKey {
    pub category: Category,
    pub status: Status,
    pub grouping: TimeGrouping,
}

pub const UNIT: &str = "kgCO₂e/m²";

const COMPLETE: [(&str, f64); 20] = [
    ("2019", 549.0),
    ("2020", 278.0),
    ("2021", 875.0),
    ("2022", 617.0),
    ("2023", 506.0),
    ("2024", 36.0),
    ("2025", 185.0),
    ("2026", 191.0),
    ("2027", 122.0),
    ("2028", 550.0),
    ("2029", 881.0),
    ("2030", 539.0),
    ("2031", 269.0),
    ("2032", 29.0),
    ("2033", 82.0),
    ("2034", 44.0),
    ("2035", 109.0),
    ("2036", 106.0),
    ("2037", 607.0),
    ("2038", 528.0),
];

const ESTIMATE: [(&str, f64); 20] = [
    ("2019", 420.0),
    ("2020", 310.0),
    ("2021", 680.0),
    ("2022", 520.0),
    ("2023", 450.0),
    ("2024", 280.0),
    ("2025", 320.0),
    ("2026", 380.0),
    ("2027", 290.0),
    ("2028", 470.0),
    ("2029", 650.0),
    ("2030", 410.0),
    ("2031", 350.0),
    ("2032", 180.0),
    ("2033", 220.0),
    ("2034", 190.0),
    ("2035", 260.0),
    ("2036", 240.0),
    ("2037", 480.0),
    ("2038", 420.0),
];

fn base_table(category: Category, status: Status) -> &'static [(&'static str, f64)] {
    match (category, status) {
        (Category::All | Category::Refurbishment | Category::NewBuild, Status::Complete) => {
            &COMPLETE
        }
        (Category::All | Category::Refurbishment | Category::NewBuild, Status::Estimate) => {
            &ESTIMATE
        }
    }
}

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Literal emissions tables. Monthly and quarterly labels count back from
/// `anchor`, so the newest sample always lands on the anchor's period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmissionsTables {
    anchor: Date,
}

impl EmissionsTables {
    pub fn anchored(anchor: Date) -> Self {
        Self { anchor }
    }

    pub fn today() -> Self {
        Self::anchored(OffsetDateTime::now_utc().date())
    }

    fn month_label(&self, back: usize) -> String {
        let months = self.anchor.year() as i64 * 12 + (self.anchor.month() as i64 - 1) - back as i64;
        let year = months.div_euclid(12);
        let month = months.rem_euclid(12) as usize;
        format!("{} {year}", MONTH_ABBR[month])
    }

    fn quarter_label(&self, back: usize) -> String {
        let quarter_of_year = (self.anchor.month() as i64 - 1) / 3;
        let quarters = self.anchor.year() as i64 * 4 + quarter_of_year - back as i64;
        format!("Q{} {}", quarters.rem_euclid(4) + 1, quarters.div_euclid(4))
    }
}

impl Default for EmissionsTables {
    fn default() -> Self {
        Self::today()
    }
}

impl SeriesSource for EmissionsTables {
    type Key = SeriesKey;

    fn fetch_series(&self, key: &SeriesKey) -> Series {
        let table = base_table(key.category, key.status);
        let count = key.grouping.expected_len(table.len());

        match key.grouping {
            TimeGrouping::Yearly => table
                .iter()
                .map(|(year, value)| Sample::new(*year, *value))
                .collect(),
            TimeGrouping::Monthly => table[table.len() - count..]
                .iter()
                .enumerate()
                .map(|(idx, (_, value))| Sample::new(self.month_label(count - 1 - idx), *value))
                .collect(),
            TimeGrouping::Quarterly => {
                let strided: Vec<f64> = table
                    .iter()
                    .step_by(TimeGrouping::QUARTER_STRIDE)
                    .map(|(_, value)| *value)
                    .collect();
                strided[strided.len() - count..]
                    .iter()
                    .enumerate()
                    .map(|(idx, value)| Sample::new(self.quarter_label(count - 1 - idx), *value))
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn tables() -> EmissionsTables {
        EmissionsTables::anchored(date!(2025 - 02 - 14))
    }

    #[test]
    fn all_complete_yearly_starts_with_2019() {
        let series = tables().fetch_series(&SeriesKey::default());
        assert_eq!(series.samples()[0], Sample::new("2019", 549.0));
        assert_eq!(series.samples()[1], Sample::new("2020", 278.0));
        assert_eq!(series.len(), 20);
    }

    #[test]
    fn every_key_yields_its_expected_length() {
        let source = tables();
        for category in Category::ALL {
            for status in Status::ALL {
                for grouping in TimeGrouping::ALL {
                    let key = SeriesKey {
                        category,
                        status,
                        grouping,
                    };
                    let series = source.fetch_series(&key);
                    assert!(!series.is_empty(), "{key:?} produced nothing");
                    assert_eq!(series.len(), grouping.expected_len(20), "{key:?}");
                }
            }
        }
        assert_eq!(TimeGrouping::Yearly.expected_len(20), 20);
        assert_eq!(TimeGrouping::Monthly.expected_len(20), 12);
        assert_eq!(TimeGrouping::Quarterly.expected_len(20), 7);
    }

    #[test]
    fn monthly_takes_last_twelve_and_ends_at_anchor() {
        let series = tables().fetch_series(&SeriesKey {
            grouping: TimeGrouping::Monthly,
            ..Default::default()
        });
        let first = &series.samples()[0];
        let last = &series.samples()[11];
        assert_eq!(first.label, "Mar 2024");
        assert_eq!(first.value, 122.0);
        assert_eq!(last.label, "Feb 2025");
        assert_eq!(last.value, 528.0);
    }

    #[test]
    fn quarterly_samples_every_third_row() {
        let series = tables().fetch_series(&SeriesKey {
            status: Status::Estimate,
            grouping: TimeGrouping::Quarterly,
            ..Default::default()
        });
        let values: Vec<f64> = series.values().collect();
        assert_eq!(values, vec![420.0, 520.0, 320.0, 470.0, 350.0, 190.0, 480.0]);
        assert_eq!(series.samples()[6].label, "Q1 2025");
        assert_eq!(series.samples()[0].label, "Q3 2023");
    }
}
