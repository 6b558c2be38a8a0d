//! Tiered catalog storage, lookup, and seed-file loading.

use crate::record::ErrorRecord;
use crate::seed;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// The three catalog tiers, ordered from least to most specific.
///
/// Lookups consult tiers in declaration order; the first tier containing
/// the requested key wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Protocol-level records shared by every consumer.
    Generic,
    /// Application-wide records.
    Application,
    /// Component-specific records; also the extension tier for
    /// [`ErrorCatalog::add`].
    Domain,
}

impl Tier {
    /// Lookup order.
    pub const CHAIN: [Tier; 3] = [Tier::Generic, Tier::Application, Tier::Domain];

    /// Stable lower-case name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Application => "application",
            Self::Domain => "domain",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while loading catalog seed data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The requested seed file was not found or could not be read.
    #[error("seed file not found: {path}")]
    FileNotFound {
        /// Path that was requested.
        path: String,
    },

    /// The seed data could not be parsed as valid TOML.
    #[error("failed to parse seed data: {reason}")]
    Parse {
        /// Human-readable parse error detail.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// ErrorCatalog
// ---------------------------------------------------------------------------

/// A set of error records organised into three ordered tiers.
///
/// Build one at startup, extend it with [`add`](Self::add), then freeze it
/// process-wide via [`crate::install`]. A catalog value also works
/// standalone (tests, embedding) without installation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorCatalog {
    generic: BTreeMap<String, ErrorRecord>,
    application: BTreeMap<String, ErrorRecord>,
    domain: BTreeMap<String, ErrorRecord>,
}

impl ErrorCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the standard records: generic HTTP-class
    /// entries, application entries, and the settlement layer's own
    /// domain entries.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for record in seed::generic_records() {
            catalog.insert(Tier::Generic, record);
        }
        for record in seed::application_records() {
            catalog.insert(Tier::Application, record);
        }
        for record in seed::domain_records() {
            catalog.insert(Tier::Domain, record);
        }
        catalog
    }

    /// Insert a record into the given tier, keyed by `record.key`.
    ///
    /// Returns the previously stored record for that key, if any (last
    /// write wins).
    pub fn insert(&mut self, tier: Tier, record: ErrorRecord) -> Option<ErrorRecord> {
        self.tier_mut(tier).insert(record.key.clone(), record)
    }

    /// Register caller-supplied records in the extension (domain) tier.
    ///
    /// Last write for a given key wins; re-adding identical records is
    /// idempotent. Intended for startup time, before the catalog is
    /// installed.
    pub fn add(&mut self, records: impl IntoIterator<Item = ErrorRecord>) {
        for record in records {
            self.insert(Tier::Domain, record);
        }
    }

    /// Look up a record by key, walking generic → application → domain.
    ///
    /// Returns `None` when no tier contains the key.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&ErrorRecord> {
        Tier::CHAIN
            .iter()
            .find_map(|tier| self.tier_map(*tier).get(key))
    }

    /// Look up a record by numeric code, walking the same tier chain.
    ///
    /// When tiers reuse a numeric code, the least specific tier wins;
    /// address shadowed records by key instead.
    #[must_use]
    pub fn lookup_code(&self, code: u16) -> Option<&ErrorRecord> {
        Tier::CHAIN.iter().find_map(|tier| {
            self.tier_map(*tier)
                .values()
                .find(|record| record.code.as_num() == Some(code))
        })
    }

    /// Number of records in the given tier.
    #[must_use]
    pub fn tier_len(&self, tier: Tier) -> usize {
        self.tier_map(tier).len()
    }

    /// Total number of records across all tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        Tier::CHAIN.iter().map(|t| self.tier_len(*t)).sum()
    }

    /// Whether the catalog holds no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn tier_map(&self, tier: Tier) -> &BTreeMap<String, ErrorRecord> {
        match tier {
            Tier::Generic => &self.generic,
            Tier::Application => &self.application,
            Tier::Domain => &self.domain,
        }
    }

    fn tier_mut(&mut self, tier: Tier) -> &mut BTreeMap<String, ErrorRecord> {
        match tier {
            Tier::Generic => &mut self.generic,
            Tier::Application => &mut self.application,
            Tier::Domain => &mut self.domain,
        }
    }
}

// ---------------------------------------------------------------------------
// Seed-file loading
// ---------------------------------------------------------------------------

/// On-disk seed shape: one array of records per tier, all optional.
#[derive(Debug, Default, Deserialize)]
struct SeedFile {
    #[serde(default)]
    generic: Vec<ErrorRecord>,
    #[serde(default)]
    application: Vec<ErrorRecord>,
    #[serde(default)]
    domain: Vec<ErrorRecord>,
}

impl ErrorCatalog {
    /// Parse a TOML seed string into a catalog.
    ///
    /// ```toml
    /// [[generic]]
    /// code = 404
    /// domain = "generic"
    /// key = "not_found"
    /// message = "The requested resource could not be found"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: SeedFile = toml::from_str(content).map_err(|e| CatalogError::Parse {
            reason: e.to_string(),
        })?;
        let mut catalog = Self::new();
        for record in file.generic {
            catalog.insert(Tier::Generic, record);
        }
        for record in file.application {
            catalog.insert(Tier::Application, record);
        }
        for record in file.domain {
            catalog.insert(Tier::Domain, record);
        }
        Ok(catalog)
    }

    /// Read and parse a TOML seed file.
    pub fn from_seed_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|_| CatalogError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_toml_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
