// SPDX-License-Identifier: MIT OR Apache-2.0
//! Settling spawned tasks.
//!
//! A task is the one place an operation can fail *without* an error
//! value: cancellation. That silent rejection is substituted with the
//! canonical upstream-unavailable record so downstream consumers always
//! receive a diagnosable error. A panicked task takes the same wrap-fault
//! path as a panicking future.

use crate::fault::{Fault, canonical};
use crate::outcome::Outcome;
use crate::wrap::{IntoOutcome, SETTLEMENT_FAULT_EVENT};
use settle_catalog::{keys, settlement_fault, upstream_unavailable};
use settle_telemetry::{Context, Reporter, reporter};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Settle a spawned task, using the process-wide default reporter.
pub async fn wrap_task<R>(handle: JoinHandle<R>) -> Outcome<R::Data, Fault<R::Error>>
where
    R: IntoOutcome,
{
    wrap_task_with(handle, reporter()).await
}

/// [`wrap_task`] with an explicitly injected fault reporter.
pub async fn wrap_task_with<R>(
    handle: JoinHandle<R>,
    reporter: Arc<dyn Reporter>,
) -> Outcome<R::Data, Fault<R::Error>>
where
    R: IntoOutcome,
{
    match handle.await {
        Ok(output) => output.into_outcome(),
        Err(err) if err.is_cancelled() => Outcome::Failure(Fault::Silent(canonical(
            keys::UPSTREAM_UNAVAILABLE,
            upstream_unavailable,
        ))),
        Err(err) => {
            let cause = err.to_string();
            let record = canonical(keys::SETTLEMENT_FAULT, settlement_fault);
            reporter.report(SETTLEMENT_FAULT_EVENT, &record, &Context::new(), &cause);
            Outcome::Failure(Fault::Wrap { record, cause })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn completed_task_settles_normally() {
        let handle = tokio::spawn(async { Ok::<_, &str>("done") });
        let outcome = wrap_task(handle).await;
        assert_eq!(outcome, Outcome::Success("done"));
    }

    #[tokio::test]
    async fn failed_task_passes_error_through() {
        let handle = tokio::spawn(async { Err::<&str, _>("boom") });
        let outcome = wrap_task(handle).await;
        assert_eq!(outcome, Outcome::Failure(Fault::Op("boom")));
    }
}
