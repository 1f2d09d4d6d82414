//! Overview and per-day reports over a dataset
//!
//! Reports are computed into plain values first (`Overview`, `DaySummary`)
//! and rendered through `Display`, so callers can also serialize them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reducers::{find_max, find_min, mean};
use crate::types::{DailyRecord, Extreme, Fahrenheit};
use crate::units::{fahrenheit_to_celsius, format_date, format_temperature};
use crate::{SummaryError, SummaryResult};

/// Which report(s) to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Overview,
    Daily,
    #[default]
    All,
}

impl ReportKind {
    pub fn includes_overview(self) -> bool {
        matches!(self, ReportKind::Overview | ReportKind::All)
    }

    pub fn includes_daily(self) -> bool {
        matches!(self, ReportKind::Daily | ReportKind::All)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown report kind: {0} (expected overview, daily or all)")]
pub struct UnknownReportKind(pub String);

impl FromStr for ReportKind {
    type Err = UnknownReportKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overview" => Ok(ReportKind::Overview),
            "daily" => Ok(ReportKind::Daily),
            "all" => Ok(ReportKind::All),
            _ => Err(UnknownReportKind(s.to_string())),
        }
    }
}

/// A Celsius temperature and the display date it belongs to
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatedTemperature {
    pub celsius: f64,
    pub date: String,
}

impl DatedTemperature {
    /// Resolve an extreme found over a column of `dataset` back to its day
    fn from_extreme(dataset: &[DailyRecord], extreme: Extreme) -> SummaryResult<Self> {
        Ok(Self {
            celsius: fahrenheit_to_celsius(extreme.value),
            date: format_date(&dataset[extreme.index].date)?,
        })
    }
}

/// Extremes and averages over a whole dataset, in Celsius
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Overview {
    pub num_days: usize,
    pub lowest: DatedTemperature,
    pub highest: DatedTemperature,
    pub average_low: f64,
    pub average_high: f64,
}

impl Overview {
    pub fn from_dataset(dataset: &[DailyRecord]) -> SummaryResult<Self> {
        if dataset.is_empty() {
            return Err(SummaryError::EmptyInput {
                operation: "overview summary",
            });
        }

        let min_temps: Vec<Fahrenheit> = dataset.iter().map(|r| r.min_temp).collect();
        let max_temps: Vec<Fahrenheit> = dataset.iter().map(|r| r.max_temp).collect();

        let lowest = find_min(&min_temps)?;
        let highest = find_max(&max_temps)?;

        Ok(Self {
            num_days: dataset.len(),
            lowest: DatedTemperature::from_extreme(dataset, lowest)?,
            highest: DatedTemperature::from_extreme(dataset, highest)?,
            average_low: fahrenheit_to_celsius(mean(&min_temps)?),
            average_high: fahrenheit_to_celsius(mean(&max_temps)?),
        })
    }
}

impl fmt::Display for Overview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Day Overview", self.num_days)?;
        writeln!(
            f,
            "  The lowest temperature will be {}, and will occur on {}.",
            format_temperature(self.lowest.celsius),
            self.lowest.date
        )?;
        writeln!(
            f,
            "  The highest temperature will be {}, and will occur on {}.",
            format_temperature(self.highest.celsius),
            self.highest.date
        )?;
        writeln!(
            f,
            "  The average low this week is {}.",
            format_temperature(self.average_low)
        )?;
        writeln!(
            f,
            "  The average high this week is {}.",
            format_temperature(self.average_high)
        )
    }
}

/// One day's low and high, in Celsius
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DaySummary {
    pub date: String,
    pub min: f64,
    pub max: f64,
}

impl DaySummary {
    pub fn from_record(record: &DailyRecord) -> SummaryResult<Self> {
        Ok(Self {
            date: format_date(&record.date)?,
            min: fahrenheit_to_celsius(record.min_temp),
            max: fahrenheit_to_celsius(record.max_temp),
        })
    }
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- {} ----", self.date)?;
        writeln!(f, "  Minimum Temperature: {}", format_temperature(self.min))?;
        writeln!(f, "  Maximum Temperature: {}", format_temperature(self.max))?;
        writeln!(f)
    }
}

/// Per-day summaries in dataset order
pub fn daily_summaries(dataset: &[DailyRecord]) -> SummaryResult<Vec<DaySummary>> {
    dataset.iter().map(DaySummary::from_record).collect()
}

/// Render the overview report; fails on an empty dataset
pub fn generate_overview_summary(dataset: &[DailyRecord]) -> SummaryResult<String> {
    Ok(Overview::from_dataset(dataset)?.to_string())
}

/// Render one block per day, in dataset order. Empty input renders as "".
pub fn generate_daily_summary(dataset: &[DailyRecord]) -> SummaryResult<String> {
    Ok(daily_summaries(dataset)?
        .iter()
        .map(ToString::to_string)
        .collect())
}
