//! The catalog's record and code types.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Code
// ---------------------------------------------------------------------------

/// Stable error code: either a numeric (HTTP-class) code or a named one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Code {
    /// Numeric code, e.g. `502`.
    Num(u16),
    /// Named code, e.g. `"no_data"`.
    Name(String),
}

impl Code {
    /// Returns the numeric value for a [`Code::Num`], `None` otherwise.
    #[must_use]
    pub fn as_num(&self) -> Option<u16> {
        match self {
            Self::Num(n) => Some(*n),
            Self::Name(_) => None,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Name(s) => f.write_str(s),
        }
    }
}

impl From<u16> for Code {
    fn from(n: u16) -> Self {
        Self::Num(n)
    }
}

impl From<&str> for Code {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

impl From<String> for Code {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

// ---------------------------------------------------------------------------
// ErrorRecord
// ---------------------------------------------------------------------------

/// Immutable catalog entry.
///
/// Identity is by catalog key: two lookups of the same key yield equal
/// records. Records never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Stable code, numeric or named.
    pub code: Code,
    /// Domain the record belongs to (e.g. `"generic"`, `"settle"`).
    pub domain: String,
    /// Lookup key, unique within its tier.
    pub key: String,
    /// Human-readable description.
    pub message: String,
}

impl ErrorRecord {
    /// Create a new record.
    pub fn new(
        code: impl Into<Code>,
        domain: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            domain: domain.into(),
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}/{}: {}",
            self.code, self.domain, self.key, self.message
        )
    }
}

impl std::error::Error for ErrorRecord {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_code_display() {
        assert_eq!(Code::Num(502).to_string(), "502");
    }

    #[test]
    fn named_code_display() {
        assert_eq!(Code::from("no_data").to_string(), "no_data");
    }

    #[test]
    fn as_num_only_for_numeric() {
        assert_eq!(Code::Num(404).as_num(), Some(404));
        assert_eq!(Code::from("x").as_num(), None);
    }

    #[test]
    fn record_display() {
        let r = ErrorRecord::new(502u16, "settle", "upstream_unavailable", "upstream gone");
        assert_eq!(
            r.to_string(),
            "[502] settle/upstream_unavailable: upstream gone"
        );
    }

    #[test]
    fn record_equality_is_structural() {
        let a = ErrorRecord::new(600u16, "application", "no_data", "no data");
        let b = ErrorRecord::new(600u16, "application", "no_data", "no data");
        assert_eq!(a, b);
    }

    #[test]
    fn code_serde_untagged_roundtrip() {
        let num = Code::Num(400);
        let json = serde_json::to_string(&num).unwrap();
        assert_eq!(json, "400");
        assert_eq!(serde_json::from_str::<Code>(&json).unwrap(), num);

        let name = Code::from("bad_request");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#""bad_request""#);
        assert_eq!(serde_json::from_str::<Code>(&json).unwrap(), name);
    }

    #[test]
    fn record_serde_roundtrip() {
        let r = ErrorRecord::new(404u16, "generic", "not_found", "missing");
        let json = serde_json::to_string(&r).unwrap();
        let back: ErrorRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
