//! Command-line front end: reads a forecast CSV and prints its reports

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use thiserror::Error;
use tracing::info;
use wxstat_config::{AppConfig, ReportFormat};
use wxstat_core::{
    daily_summaries, generate_daily_summary, generate_overview_summary, parse_records, DailyRecord,
    Dataset, DaySummary, Overview, ReportKind,
};

pub const USAGE: &str = "\
Usage: wxstat [overview|daily|all] [--json|--text] [--log-json] [PATH]

Summarize daily min/max temperatures (Fahrenheit) from a CSV file with a
header row followed by date,min,max rows.

Options:
  --json       Emit the report as JSON
  --text       Emit the report as text (default)
  --log-json   Write logs to stderr as JSON
  -h, --help   Show this help

PATH defaults to [input].path from the file named by WXSTAT_CONFIG
(wxstat.toml).
";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("No input file given and no [input].path configured")]
    MissingInput,
}

/// Parsed command line; unset fields fall back to config
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub kind: Option<ReportKind>,
    pub format: Option<ReportFormat>,
    pub log_json: bool,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(Options),
}

/// Parse arguments (without the program name)
///
/// A report kind is only recognized as the first argument, so a file named
/// `daily` can still be passed as the path.
pub fn parse_args<I, S>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = Options::default();

    for (position, arg) in args.into_iter().map(Into::into).enumerate() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--json" => options.format = Some(ReportFormat::Json),
            "--text" => options.format = Some(ReportFormat::Text),
            "--log-json" => options.log_json = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(UsageError::UnknownOption(flag.to_string()));
            }
            word => {
                if position == 0 {
                    if let Ok(kind) = word.parse::<ReportKind>() {
                        options.kind = Some(kind);
                        continue;
                    }
                }
                if options.path.is_some() {
                    return Err(UsageError::UnexpectedArgument(word.to_string()));
                }
                options.path = Some(PathBuf::from(word));
            }
        }
    }

    Ok(Command::Run(options))
}

/// Read every row of a CSV file as text fields
///
/// The header is returned as the first row; short rows are kept so the
/// record parser can drop them. Blank lines are skipped by the reader.
pub fn load_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV '{}'", path.display()))?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record =
            result.with_context(|| format!("Failed to read CSV '{}'", path.display()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}

/// Read a CSV file into a dataset, dropping malformed rows
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let rows = load_rows(path)?;
    let dataset = parse_records(&rows);

    info!(
        path = %path.display(),
        rows = rows.len().saturating_sub(1),
        records = dataset.len(),
        "Loaded forecast"
    );
    Ok(dataset)
}

#[derive(Debug, Serialize)]
struct JsonReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    overview: Option<Overview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    daily: Option<Vec<DaySummary>>,
}

/// Render the requested report(s) for `dataset`
///
/// Text output for `All` is the overview, a blank line, then the daily
/// blocks.
pub fn render(kind: ReportKind, format: ReportFormat, dataset: &[DailyRecord]) -> Result<String> {
    match format {
        ReportFormat::Text => {
            let mut out = String::new();
            if kind.includes_overview() {
                out.push_str(&generate_overview_summary(dataset)?);
            }
            if kind.includes_daily() {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&generate_daily_summary(dataset)?);
            }
            Ok(out)
        }
        ReportFormat::Json => {
            let report = JsonReport {
                overview: kind
                    .includes_overview()
                    .then(|| Overview::from_dataset(dataset))
                    .transpose()?,
                daily: kind
                    .includes_daily()
                    .then(|| daily_summaries(dataset))
                    .transpose()?,
            };
            let mut out = serde_json::to_string_pretty(&report)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Resolve options against config, load the input and render it
pub fn run(options: &Options, cfg: &AppConfig) -> Result<String> {
    let path = options
        .path
        .clone()
        .or_else(|| cfg.input_path())
        .ok_or(UsageError::MissingInput)?;
    let kind = options.kind.unwrap_or_else(|| cfg.report_kind());
    let format = options.format.unwrap_or_else(|| cfg.report_format());

    let dataset = load_dataset(&path)?;
    render(kind, format, &dataset)
        .with_context(|| format!("Failed to summarize '{}'", path.display()))
}
