// SPDX-License-Identifier: MIT OR Apache-2.0
//! The tagged settlement value.

use crate::fault::{Fault, canonical};
use settle_catalog::{keys, no_data};

/// Outcome of one settled asynchronous operation.
///
/// Exactly one side exists by construction: either the success payload or
/// the failure. Values are freely cloned and passed around; nothing is
/// shared between outcomes of different operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T, E> {
    /// The operation succeeded with this payload.
    Success(T),
    /// The operation failed.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Whether this is a success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this is a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the success payload, if any.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure, if any.
    #[must_use]
    pub fn err(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// Consume into the success payload, if any.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Consume into the failure, if any.
    #[must_use]
    pub fn into_err(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    /// Map the success payload, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Success(data) => Outcome::Success(f(data)),
            Self::Failure(err) => Outcome::Failure(err),
        }
    }

    /// Map the failure, leaving successes untouched.
    pub fn map_fault<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Success(data) => Outcome::Success(data),
            Self::Failure(err) => Outcome::Failure(f(err)),
        }
    }

    /// Normalize into the native [`Result`] contract: the payload on
    /// success, the failure as a plain `Err`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(err) => Err(err),
        }
    }
}

impl<T, E> Outcome<Option<T>, Fault<E>> {
    /// Enforce the strict no-payload policy: a success carrying `None`
    /// becomes a failure with the canonical `no_data` record. `None` is
    /// the absent-value sentinel here — a payload of `()` or
    /// `Value::Null` is an ordinary success.
    pub fn require_data(self) -> Outcome<T, Fault<E>> {
        match self {
            Self::Success(Some(data)) => Outcome::Success(data),
            Self::Success(None) => {
                Outcome::Failure(Fault::Silent(canonical(keys::NO_DATA, no_data)))
            }
            Self::Failure(err) => Outcome::Failure(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Failure(err),
        }
    }
}
