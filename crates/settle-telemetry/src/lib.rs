// SPDX-License-Identifier: MIT OR Apache-2.0
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use settle_catalog::ErrorRecord;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, OnceLock};

/// Structured key-value context attached to a report.
pub type Context = BTreeMap<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// Reporter
// ---------------------------------------------------------------------------

/// Consumer of fault reports.
///
/// Implementations are synchronous and fire-and-forget, and must not
/// panic; the settlement engine calls [`report`](Self::report) from the
/// middle of its own failure handling.
pub trait Reporter: Send + Sync {
    /// Report one fault: a fixed event name, the canonical catalog
    /// record, structured context, and the rendered cause.
    fn report(&self, event: &'static str, record: &ErrorRecord, context: &Context, cause: &str);
}

// ---------------------------------------------------------------------------
// TracingReporter
// ---------------------------------------------------------------------------

/// Default reporter: forwards to `tracing::error!` with structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: &'static str, record: &ErrorRecord, context: &Context, cause: &str) {
        tracing::error!(
            event,
            code = %record.code,
            domain = %record.domain,
            key = %record.key,
            context = ?context,
            cause,
            "{}",
            record.message,
        );
    }
}

// ---------------------------------------------------------------------------
// CaptureReporter
// ---------------------------------------------------------------------------

/// One captured report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Event name the engine reported under.
    pub event: String,
    /// Canonical record attached to the report.
    pub record: ErrorRecord,
    /// Structured context.
    pub context: Context,
    /// Rendered cause.
    pub cause: String,
}

/// Reporter that records every report for later assertions.
#[derive(Debug, Clone, Default)]
pub struct CaptureReporter {
    reports: Arc<Mutex<Vec<Report>>>,
}

impl CaptureReporter {
    /// Create a new empty capture reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured reports.
    #[must_use]
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().expect("capture lock poisoned").clone()
    }

    /// Number of captured reports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.lock().expect("capture lock poisoned").len()
    }

    /// Whether nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard all captured reports.
    pub fn clear(&self) {
        self.reports.lock().expect("capture lock poisoned").clear();
    }
}

impl Reporter for CaptureReporter {
    fn report(&self, event: &'static str, record: &ErrorRecord, context: &Context, cause: &str) {
        self.reports
            .lock()
            .expect("capture lock poisoned")
            .push(Report {
                event: event.to_string(),
                record: record.clone(),
                context: context.clone(),
                cause: cause.to_string(),
            });
    }
}

// ---------------------------------------------------------------------------
// Process-wide default
// ---------------------------------------------------------------------------

static DEFAULT: OnceLock<Arc<dyn Reporter>> = OnceLock::new();

/// Returned when [`set_reporter`] is called after a default reporter is
/// already in place.
#[derive(Debug)]
pub struct ReporterInstalled;

impl std::fmt::Display for ReporterInstalled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a default reporter is already installed for this process")
    }
}

impl std::error::Error for ReporterInstalled {}

/// Install the process-wide default reporter. One-shot, startup-time.
pub fn set_reporter(reporter: Arc<dyn Reporter>) -> Result<(), ReporterInstalled> {
    DEFAULT.set(reporter).map_err(|_| ReporterInstalled)
}

/// The process-wide default reporter ([`TracingReporter`] if none was
/// installed).
#[must_use]
pub fn reporter() -> Arc<dyn Reporter> {
    DEFAULT
        .get_or_init(|| Arc::new(TracingReporter))
        .clone()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
