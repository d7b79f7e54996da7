// Batch submission: load every user from disk and create them one by one on
// the remote API, echoing each response body to the output.

use crate::api::Transport;
use crate::config::Config;
use crate::models::load_users;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};

/// Outcome counts of one submission loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitReport {
    /// Records whose response body was written out.
    pub submitted: usize,
    /// Records dropped because serialization or request building failed.
    pub skipped: usize,
    /// Set when a send or body-read failure ended the loop early.
    pub aborted: bool,
}

/// Post every record in order, writing each response body as one line.
///
/// Serialization and request-building failures skip the record. A send or
/// body-read failure stops the loop: later records are never attempted.
/// Only a failure to write to `out` is returned as an error.
pub fn submit_all<T, R, W>(records: &[T], transport: &R, out: &mut W) -> io::Result<SubmitReport>
where
    T: Serialize,
    R: Transport + ?Sized,
    W: Write,
{
    let mut report = SubmitReport::default();

    for record in records {
        let payload = match serde_json::to_vec(record) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize user");
                report.skipped += 1;
                continue;
            }
        };

        match transport.create(payload) {
            Ok(body) => {
                writeln!(out, "{body}")?;
                report.submitted += 1;
            }
            Err(e) if e.aborts_run() => {
                tracing::error!(error = %e, "stopping submission");
                report.aborted = true;
                break;
            }
            Err(e) => {
                tracing::error!(error = %e, "skipping user");
                report.skipped += 1;
            }
        }
    }

    out.flush()?;
    Ok(report)
}

/// Load users from `config.data_path` and submit them through `transport`.
///
/// Unreadable or malformed input is returned as an error before any request
/// is made. An aborted loop still returns `Ok`.
pub fn run<R, W>(config: &Config, transport: &R, out: &mut W) -> Result<SubmitReport>
where
    R: Transport + ?Sized,
    W: Write,
{
    let users = load_users(&config.data_path).context("Error occurred while loading users")?;
    tracing::debug!(count = users.len(), path = %config.data_path.display(), "loaded users");

    let report = submit_all(&users, transport, out).context("Failed to write response")?;
    if report.aborted {
        tracing::warn!(
            submitted = report.submitted,
            skipped = report.skipped,
            remaining = users.len() - report.submitted - report.skipped,
            "submission aborted"
        );
    } else {
        tracing::info!(
            submitted = report.submitted,
            skipped = report.skipped,
            "submission finished"
        );
    }
    Ok(report)
}
