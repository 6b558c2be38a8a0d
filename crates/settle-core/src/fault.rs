// SPDX-License-Identifier: MIT OR Apache-2.0
//! The failure side of an [`Outcome`](crate::Outcome).

use settle_catalog::ErrorRecord;

/// Why a wrapped operation failed. The three variants are disjoint
/// failure classes:
///
/// * [`Op`](Self::Op) — the operation's own error, passed through
///   unmodified, never rewritten;
/// * [`Silent`](Self::Silent) — the operation produced no usable value
///   (no payload, or cancelled before failing with one), substituted
///   with a canonical catalog record so consumers always receive a
///   diagnosable error;
/// * [`Wrap`](Self::Wrap) — the wrapping machinery itself faulted while
///   driving the operation; always reported through the telemetry seam
///   before being returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Fault<E> {
    /// Error the operation itself settled with.
    #[error("{0}")]
    Op(E),

    /// Canonical record substituted for a silent failure.
    #[error("{0}")]
    Silent(ErrorRecord),

    /// Internal fault in the wrapping machinery, with the rendered cause.
    #[error("{record}: {cause}")]
    Wrap {
        /// Canonical settle-domain record.
        record: ErrorRecord,
        /// Rendered panic payload or join error.
        cause: String,
    },
}

impl<E> Fault<E> {
    /// The operation's own error, if this is an [`Op`](Self::Op) fault.
    #[must_use]
    pub fn op(&self) -> Option<&E> {
        match self {
            Self::Op(err) => Some(err),
            _ => None,
        }
    }

    /// The canonical record, if one was substituted or attached.
    #[must_use]
    pub fn record(&self) -> Option<&ErrorRecord> {
        match self {
            Self::Op(_) => None,
            Self::Silent(record) => Some(record),
            Self::Wrap { record, .. } => Some(record),
        }
    }

    /// Whether this fault carries the operation's own error.
    #[must_use]
    pub fn is_op(&self) -> bool {
        matches!(self, Self::Op(_))
    }

    /// Whether this fault was substituted for a silent failure.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Silent(_))
    }

    /// Whether the wrapping machinery itself faulted.
    #[must_use]
    pub fn is_wrap(&self) -> bool {
        matches!(self, Self::Wrap { .. })
    }

    /// Map the operation-error type, leaving the other classes untouched.
    pub fn map_op<F>(self, f: impl FnOnce(E) -> F) -> Fault<F> {
        match self {
            Self::Op(err) => Fault::Op(f(err)),
            Self::Silent(record) => Fault::Silent(record),
            Self::Wrap { record, cause } => Fault::Wrap { record, cause },
        }
    }
}

/// Resolve a canonical record through the installed catalog, falling
/// back to the built-in seed when a custom catalog omits the key.
pub(crate) fn canonical(key: &str, fallback: fn() -> ErrorRecord) -> ErrorRecord {
    settle_catalog::catalog()
        .lookup(key)
        .cloned()
        .unwrap_or_else(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use settle_catalog::{keys, settlement_fault, upstream_unavailable};

    #[test]
    fn op_fault_displays_inner_error() {
        let fault: Fault<&str> = Fault::Op("connection refused");
        assert_eq!(fault.to_string(), "connection refused");
        assert!(fault.is_op());
        assert_eq!(fault.op(), Some(&"connection refused"));
        assert!(fault.record().is_none());
    }

    #[test]
    fn silent_fault_displays_record() {
        let fault: Fault<&str> = Fault::Silent(upstream_unavailable());
        assert!(fault.is_silent());
        assert!(fault.to_string().contains("upstream_unavailable"));
        assert_eq!(fault.record().unwrap().code.as_num(), Some(502));
    }

    #[test]
    fn wrap_fault_displays_record_and_cause() {
        let fault: Fault<&str> = Fault::Wrap {
            record: settlement_fault(),
            cause: "boom".into(),
        };
        assert!(fault.is_wrap());
        let rendered = fault.to_string();
        assert!(rendered.contains("settlement_fault"));
        assert!(rendered.ends_with("boom"));
    }

    #[test]
    fn map_op_leaves_other_classes_untouched() {
        let silent: Fault<&str> = Fault::Silent(upstream_unavailable());
        let mapped = silent.map_op(|s| s.len());
        assert_eq!(mapped, Fault::Silent(upstream_unavailable()));

        let op: Fault<&str> = Fault::Op("abc");
        assert_eq!(op.map_op(|s| s.len()), Fault::Op(3));
    }

    #[test]
    fn canonical_resolves_through_installed_catalog() {
        let record = canonical(keys::SETTLEMENT_FAULT, settlement_fault);
        assert_eq!(record, settlement_fault());
    }

    #[test]
    fn canonical_falls_back_for_unknown_keys() {
        let record = canonical("not_in_any_catalog", upstream_unavailable);
        assert_eq!(record, upstream_unavailable());
    }
}
