// SPDX-License-Identifier: MIT OR Apache-2.0
//! The settlement engine: `wrap` and its future adapters.

use crate::fault::{Fault, canonical};
use crate::outcome::Outcome;
use pin_project_lite::pin_project;
use settle_catalog::{keys, settlement_fault};
use settle_telemetry::{Context, Reporter, reporter};
use std::any::Any;
use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{self, Poll};

/// Fixed event name reported when the wrapping machinery itself faults.
pub const SETTLEMENT_FAULT_EVENT: &str = keys::SETTLEMENT_FAULT;

// ---------------------------------------------------------------------------
// IntoOutcome
// ---------------------------------------------------------------------------

/// Settlement values the engine knows how to normalize.
///
/// Implemented for `Result` (the ordinary case) and for `Outcome` itself,
/// which passes through unchanged — that identity makes wrapping
/// idempotent: an operation resolving with an already-wrapped value is
/// forwarded as-is, and `wrap(wrap(op))` settles identically to
/// `wrap(op)`.
pub trait IntoOutcome {
    /// Success payload type.
    type Data;
    /// Operation error type.
    type Error;

    /// Normalize into a tagged [`Outcome`].
    fn into_outcome(self) -> Outcome<Self::Data, Fault<Self::Error>>;
}

impl<T, E> IntoOutcome for Result<T, E> {
    type Data = T;
    type Error = E;

    fn into_outcome(self) -> Outcome<T, Fault<E>> {
        match self {
            Ok(data) => Outcome::Success(data),
            Err(err) => Outcome::Failure(Fault::Op(err)),
        }
    }
}

impl<T, E> IntoOutcome for Outcome<T, Fault<E>> {
    type Data = T;
    type Error = E;

    fn into_outcome(self) -> Outcome<T, Fault<E>> {
        self
    }
}

// ---------------------------------------------------------------------------
// wrap
// ---------------------------------------------------------------------------

/// Wrap an asynchronous operation into a future that always settles with
/// an [`Outcome`], using the process-wide default reporter for wrap
/// faults.
pub fn wrap<F>(op: F) -> Settle<F>
where
    F: Future,
    F::Output: IntoOutcome,
{
    wrap_with(op, reporter())
}

/// [`wrap`] with an explicitly injected fault reporter.
pub fn wrap_with<F>(op: F, reporter: Arc<dyn Reporter>) -> Settle<F>
where
    F: Future,
    F::Output: IntoOutcome,
{
    Settle { op, reporter }
}

/// Wrap and normalize in one step: the returned future re-enters the
/// native `Result` contract, so it drops into `try_join!`-style fan-in
/// combinators and the first failure propagates as the combinator's
/// error.
pub fn wrap_normalized<F>(op: F) -> Normalized<F>
where
    F: Future,
    F::Output: IntoOutcome,
{
    wrap(op).normalized()
}

/// Wrap with the strict no-payload policy: a success carrying `None` is
/// rewritten to the canonical `no_data` failure.
pub async fn wrap_required<F, T, E>(op: F) -> Outcome<T, Fault<E>>
where
    F: Future<Output = Result<Option<T>, E>>,
{
    wrap(op).await.require_data()
}

// ---------------------------------------------------------------------------
// Settle
// ---------------------------------------------------------------------------

pin_project! {
    /// Future adapter returned by [`wrap`].
    ///
    /// Settles with an [`Outcome`] no matter how the inner operation
    /// ends. Polling delegates 1:1 to the wrapped operation — no extra
    /// suspension points — and a panic raised while polling is reported
    /// exactly once and converted into a [`Fault::Wrap`] failure rather
    /// than escaping to the caller.
    #[must_use = "futures do nothing unless polled"]
    pub struct Settle<F> {
        #[pin]
        op: F,
        reporter: Arc<dyn Reporter>,
    }
}

impl<F> Settle<F> {
    /// Adapt this settlement into the native `Result` contract.
    pub fn normalized(self) -> Normalized<F> {
        Normalized { inner: self }
    }
}

impl<F> Future for Settle<F>
where
    F: Future,
    F::Output: IntoOutcome,
{
    type Output = Outcome<<F::Output as IntoOutcome>::Data, Fault<<F::Output as IntoOutcome>::Error>>;

    fn poll(self: Pin<&mut Self>, cx: &mut task::Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let op = this.op;
        match catch_unwind(AssertUnwindSafe(|| op.poll(cx))) {
            Ok(Poll::Pending) => Poll::Pending,
            Ok(Poll::Ready(output)) => Poll::Ready(output.into_outcome()),
            Err(payload) => {
                let cause = panic_message(payload.as_ref());
                let record = canonical(keys::SETTLEMENT_FAULT, settlement_fault);
                this.reporter
                    .report(SETTLEMENT_FAULT_EVENT, &record, &Context::new(), &cause);
                Poll::Ready(Outcome::Failure(Fault::Wrap { record, cause }))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Normalized
// ---------------------------------------------------------------------------

pin_project! {
    /// A wrapped operation adapted back into the native `Result`
    /// contract: success yields the payload, failure yields the
    /// [`Fault`] as a plain `Err`.
    #[must_use = "futures do nothing unless polled"]
    pub struct Normalized<F> {
        #[pin]
        inner: Settle<F>,
    }
}

impl<F> Future for Normalized<F>
where
    F: Future,
    F::Output: IntoOutcome,
{
    type Output = Result<<F::Output as IntoOutcome>::Data, Fault<<F::Output as IntoOutcome>::Error>>;

    fn poll(self: Pin<&mut Self>, cx: &mut task::Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(cx).map(Outcome::into_result)
    }
}

/// Render a panic payload for reporting.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "opaque panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn success_settles_with_payload() {
        let outcome = wrap(async { Ok::<_, &str>(42) }).await;
        assert_eq!(outcome, Outcome::Success(42));
    }

    #[tokio::test]
    async fn failure_settles_with_op_fault() {
        let outcome = wrap(async { Err::<u32, _>("denied") }).await;
        assert_eq!(outcome, Outcome::Failure(Fault::Op("denied")));
    }

    #[tokio::test]
    async fn pending_operations_are_driven_to_settlement() {
        let outcome = wrap(async {
            tokio::task::yield_now().await;
            Ok::<_, &str>("later")
        })
        .await;
        assert_eq!(outcome, Outcome::Success("later"));
    }

    #[test]
    fn panic_message_renders_str_and_string() {
        let boxed: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(boxed.as_ref()), "static");

        let boxed: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(boxed.as_ref()), "owned");

        let boxed: Box<dyn Any + Send> = Box::new(17u8);
        assert_eq!(panic_message(boxed.as_ref()), "opaque panic payload");
    }
}
