use std::io::Write;

use crate::error::AppError;
use crate::pipeline::{dispatch, format, summarize};
use crate::types::record::WorkoutRecord;

/// What the driver does when a record fails to dispatch or compute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure and return it.
    #[default]
    Abort,
    /// Log the failure, skip the record, keep going.
    Report,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub written: usize,
    pub failed: usize,
}

/// Dispatches, summarizes and formats a single record.
pub fn render(record: &WorkoutRecord) -> Result<String, AppError> {
    let workout = dispatch::dispatch(record)?;
    let summary = summarize::summarize(&workout)?;
    Ok(format::message(&summary))
}

pub fn run<W: Write>(
    records: &[WorkoutRecord],
    out: &mut W,
    policy: FailurePolicy,
) -> Result<RunReport, AppError> {
    let mut report = RunReport::default();

    for (index, record) in records.iter().enumerate() {
        match render(record) {
            Ok(line) => {
                writeln!(out, "{}", line)?;
                report.written += 1;
            }
            Err(err) if policy == FailurePolicy::Report => {
                tracing::warn!(
                    "Skipping record {} ({}): {}",
                    index,
                    record.workout_type,
                    err
                );
                report.failed += 1;
            }
            Err(err) => return Err(err),
        }
    }

    out.flush()?;

    tracing::info!(
        "Processed {} records ({} written, {} failed)",
        records.len(),
        report.written,
        report.failed
    );

    Ok(report)
}
