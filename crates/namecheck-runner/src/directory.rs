//! Async name directory.
//!
//! The checker talks to a [`NameDirectory`] rather than to the core lookup
//! directly, so a real backend can be swapped in behind the same contract.

use async_trait::async_trait;

use namecheck_core::{lookup_in, AllowList, LookupOutcome};

#[async_trait]
pub trait NameDirectory: Send + Sync {
    /// Resolve `name` to exactly one outcome.
    async fn lookup(&self, name: &str) -> LookupOutcome;
}

/// Directory backed by an in-memory allow-list.
///
/// Yields to the scheduler once before resolving, so callers observe the
/// outcome on a later tick the way a remote lookup would deliver it.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    list: AllowList,
}

impl StaticDirectory {
    pub fn new(list: AllowList) -> Self {
        Self { list }
    }
}

#[async_trait]
impl NameDirectory for StaticDirectory {
    async fn lookup(&self, name: &str) -> LookupOutcome {
        tokio::task::yield_now().await;
        lookup_in(&self.list, name)
    }
}
