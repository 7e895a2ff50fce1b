//! Plain CSV for displayed series. Fields are joined with commas and never
//! quoted, so labels and header cells must not contain commas themselves.

use thiserror::Error;

use crate::core::format::slugify;
use crate::data::portfolio::PortfolioStat;
use crate::data::{Sample, Series};

pub const SERIES_HEADER: &str = "Year,Value";

#[derive(Debug, Error, PartialEq)]
pub enum CsvError {
    #[error("csv is empty")]
    Empty,
    #[error("line {line}: expected `label,value`")]
    MissingField { line: usize },
    #[error("line {line}: `{raw}` is not a number")]
    InvalidValue { line: usize, raw: String },
}

/// One header row, then `label,value` per sample.
pub fn series_to_csv(series: &Series, header: &str) -> String {
    let mut csv = String::with_capacity(header.len() + series.len() * 16);
    csv.push_str(header);
    csv.push('\n');
    for sample in series {
        csv.push_str(&format!("{},{}\n", sample.label, sample.value));
    }
    csv
}

/// Reads back what [`series_to_csv`] writes. The first line is always the
/// header, even when blank, and is returned untouched. Blank data lines are
/// skipped.
pub fn parse_series_csv(text: &str) -> Result<(String, Series), CsvError> {
    let mut lines = text.lines().enumerate();
    let header = lines
        .next()
        .map(|(_, line)| line.trim_end_matches('\r').to_string())
        .ok_or(CsvError::Empty)?;

    let mut samples = Vec::new();
    for (index, raw_line) in lines {
        let line = raw_line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;
        let (label, raw_value) = line
            .rsplit_once(',')
            .ok_or(CsvError::MissingField { line: line_no })?;
        let value = raw_value
            .trim()
            .parse::<f64>()
            .map_err(|_| CsvError::InvalidValue {
                line: line_no,
                raw: raw_value.to_string(),
            })?;
        samples.push(Sample::new(label, value));
    }

    Ok((header, Series::new(samples)))
}

/// `Year,<title>,Unit` followed by one row per year of the stat.
pub fn portfolio_csv(stat: &PortfolioStat) -> String {
    let mut csv = format!("Year,{},Unit\n", stat.title);
    for (year, value) in stat.yearly {
        csv.push_str(&format!("{year},{value},{}\n", stat.unit));
    }
    csv
}

/// `<slug(title)>-<date>.csv`.
pub fn portfolio_filename(stat: &PortfolioStat, date: &str) -> String {
    format!("{}-{date}.csv", slugify(stat.title))
}
