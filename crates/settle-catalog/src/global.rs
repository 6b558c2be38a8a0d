//! Process-wide catalog installation.
//!
//! All mutation happens during single-threaded startup: build an
//! [`ErrorCatalog`], extend it, then [`install`] it once. Lookups through
//! [`catalog`] after that point are lock-free.

use crate::catalog::ErrorCatalog;
use std::sync::OnceLock;

static INSTALLED: OnceLock<ErrorCatalog> = OnceLock::new();

/// Returned when [`install`] is called after a catalog is already in
/// place (whether installed explicitly or self-installed by [`catalog`]).
#[derive(Debug, thiserror::Error)]
#[error("an error catalog is already installed for this process")]
pub struct InstallError;

/// Install the process-wide catalog. One-shot: the first call wins and
/// every later call fails.
pub fn install(catalog: ErrorCatalog) -> Result<(), InstallError> {
    INSTALLED.set(catalog).map_err(|_| InstallError)
}

/// The process-wide catalog.
///
/// If nothing was installed yet, [`ErrorCatalog::standard`] is installed
/// on first use.
#[must_use]
pub fn catalog() -> &'static ErrorCatalog {
    INSTALLED.get_or_init(ErrorCatalog::standard)
}
