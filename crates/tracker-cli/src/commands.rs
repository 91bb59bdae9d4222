//! Command implementations.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use tracker_model::{Batch, ValidationReport};
use tracker_validate::{InMemoryPreheat, ValidationContext, build_default_pipeline};

use crate::cli::BatchArgs;

const REPORT_SCHEMA: &str = "tracker-validator.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Outcome of `tracker batch`, consumed by the summary printer.
pub struct BatchOutcome {
    pub batch_len: usize,
    pub report: ValidationReport,
    pub report_path: Option<PathBuf>,
}

pub fn run_batch(args: &BatchArgs) -> Result<BatchOutcome> {
    let batch: Batch = read_json(&args.batch_file).context("failed to load batch file")?;
    let preheat: InMemoryPreheat =
        read_json(&args.reference_file).context("failed to load reference-data file")?;

    info!(events = batch.len(), "validating batch");
    let ctx = ValidationContext::new(&preheat);
    let report = build_default_pipeline().validate(&batch, &ctx);
    info!(reports = report.error_count(), "validation finished");

    let report_path = match &args.report_json {
        Some(path) => {
            write_report_json(path, &report, batch.len())?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(BatchOutcome {
        batch_len: batch.len(),
        report,
        report_path,
    })
}

pub fn run_codes() {
    for code in tracker_model::ALL_ERROR_CODES {
        println!("{}  {}", code.as_str(), code.message_template());
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("cannot parse {}", path.display()))
}

#[derive(Debug, Serialize)]
struct ReportPayload {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    events: usize,
    reports: Vec<ReportJson>,
}

#[derive(Debug, Serialize)]
struct ReportJson {
    index: usize,
    code: String,
    args: Vec<String>,
    message: String,
}

fn build_payload(report: &ValidationReport, events: usize, generated_at: String) -> ReportPayload {
    ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at,
        events,
        reports: report
            .reports
            .iter()
            .map(|entry| ReportJson {
                index: entry.index,
                code: entry.code.as_str().to_string(),
                args: entry.args.clone(),
                message: entry.message(),
            })
            .collect(),
    }
}

fn write_report_json(path: &PathBuf, report: &ValidationReport, events: usize) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let payload = build_payload(report, events, Utc::now().to_rfc3339());
    let json = serde_json::to_string_pretty(&payload)?;
    fs::write(path, format!("{json}\n")).with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}
