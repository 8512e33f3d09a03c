//! Allow-list of names a lookup accepts.
//!
//! Matching is exact: no trimming, no case folding.

use crate::error::{NameCheckError, Result};

/// Names accepted when no override is configured.
pub const DEFAULT_NAMES: [&str; 2] = ["colin", "bob"];

/// Ordered, immutable list of valid names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    names: Vec<String>,
}

impl Default for AllowList {
    fn default() -> Self {
        Self {
            names: DEFAULT_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AllowList {
    /// Build a list from configured names.
    /// Rejects an empty list, empty entries and duplicates.
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(NameCheckError::BadConfig("names must not be empty".into()));
        }
        for (i, n) in names.iter().enumerate() {
            if n.is_empty() {
                return Err(NameCheckError::BadConfig(format!("names[{i}] must not be empty")));
            }
            if names[..i].contains(n) {
                return Err(NameCheckError::BadConfig(format!("duplicate name: {n}")));
            }
        }
        Ok(Self { names })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
