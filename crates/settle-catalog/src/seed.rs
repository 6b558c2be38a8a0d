//! Built-in seed records.
//!
//! The generic tier carries the HTTP-class records every consumer shares;
//! the application tier carries records about operations that settle
//! without usable values; the domain tier carries the settlement layer's
//! own records (the original bad-gateway-class pair).

use crate::record::ErrorRecord;

/// Well-known lookup keys for the seeded records.
pub mod keys {
    /// Generic 400.
    pub const BAD_REQUEST: &str = "bad_request";
    /// Generic 401.
    pub const UNAUTHORIZED: &str = "unauthorized";
    /// Generic 403.
    pub const FORBIDDEN: &str = "forbidden";
    /// Generic 404.
    pub const NOT_FOUND: &str = "not_found";
    /// Generic 405.
    pub const METHOD_NOT_ALLOWED: &str = "method_not_allowed";
    /// Generic 500.
    pub const INTERNAL_ERROR: &str = "internal_error";
    /// Application 460.
    pub const UNSUPPORTED: &str = "unsupported";
    /// Application 550.
    pub const UNDEFINED_RESOLUTION: &str = "undefined_resolution";
    /// Application 600: an operation settled successfully but carried no
    /// observable payload.
    pub const NO_DATA: &str = "no_data";
    /// Settle domain 500: the wrapping machinery itself faulted.
    pub const SETTLEMENT_FAULT: &str = "settlement_fault";
    /// Settle domain 502: an operation failed without an error value.
    pub const UPSTREAM_UNAVAILABLE: &str = "upstream_unavailable";
}

pub(crate) fn generic_records() -> Vec<ErrorRecord> {
    vec![
        ErrorRecord::new(
            400u16,
            "generic",
            keys::BAD_REQUEST,
            "The server cannot or will not process the request",
        ),
        ErrorRecord::new(401u16, "generic", keys::UNAUTHORIZED, "Authentication required"),
        ErrorRecord::new(
            403u16,
            "generic",
            keys::FORBIDDEN,
            "Valid request, but the requested action is forbidden",
        ),
        ErrorRecord::new(
            404u16,
            "generic",
            keys::NOT_FOUND,
            "The requested resource could not be found",
        ),
        ErrorRecord::new(
            405u16,
            "generic",
            keys::METHOD_NOT_ALLOWED,
            "The requested method is not supported for the requested resource",
        ),
        ErrorRecord::new(
            500u16,
            "generic",
            keys::INTERNAL_ERROR,
            "Unexpected condition was encountered",
        ),
    ]
}

pub(crate) fn application_records() -> Vec<ErrorRecord> {
    vec![
        ErrorRecord::new(
            460u16,
            "application",
            keys::UNSUPPORTED,
            "The requested operation is not supported by this application",
        ),
        ErrorRecord::new(
            550u16,
            "application",
            keys::UNDEFINED_RESOLUTION,
            "Operation unexpectedly settled without a value",
        ),
        ErrorRecord::new(
            600u16,
            "application",
            keys::NO_DATA,
            "No data returned by the settled operation",
        ),
    ]
}

pub(crate) fn domain_records() -> Vec<ErrorRecord> {
    vec![settlement_fault(), upstream_unavailable()]
}

/// The application-tier record substituted when an operation succeeds
/// without an observable payload.
#[must_use]
pub fn no_data() -> ErrorRecord {
    ErrorRecord::new(
        600u16,
        "application",
        keys::NO_DATA,
        "No data returned by the settled operation",
    )
}

/// The settle-domain record substituted when an operation fails without
/// an error value (e.g. a cancelled task).
#[must_use]
pub fn upstream_unavailable() -> ErrorRecord {
    ErrorRecord::new(
        502u16,
        "settle",
        keys::UPSTREAM_UNAVAILABLE,
        "Operation failed without an error value",
    )
}

/// The settle-domain record carried by wrap faults.
#[must_use]
pub fn settlement_fault() -> ErrorRecord {
    ErrorRecord::new(
        500u16,
        "settle",
        keys::SETTLEMENT_FAULT,
        "Panic raised while settling an operation",
    )
}
