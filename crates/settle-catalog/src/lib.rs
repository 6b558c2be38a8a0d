//! Hierarchical error catalog with tiered lookup.
//!
//! Every catalog entry is an [`ErrorRecord`] carrying a stable [`Code`]
//! (numeric or named), a domain, a lookup key, and a human-readable
//! message. Records live in one of three ordered tiers — generic,
//! application, domain — and [`ErrorCatalog::lookup`] consults the tiers
//! in that order, first hit wins.
//!
//! The catalog is populated at process start (built-in seed, caller
//! [`ErrorCatalog::add`] calls, TOML seed files) and then frozen by
//! [`install`]; [`catalog`] reads need no synchronization afterwards.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod global;
mod record;
mod seed;

pub use catalog::{CatalogError, ErrorCatalog, Tier};
pub use global::{InstallError, catalog, install};
pub use record::{Code, ErrorRecord};
pub use seed::{keys, no_data, settlement_fault, upstream_unavailable};
