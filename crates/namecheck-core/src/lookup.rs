//! Lookup contract: one name in, exactly one outcome out.
//!
//! Two shapes are offered. [`lookup`] returns the outcome directly.
//! [`lookup_with`] hands it to an error-first callback; the callback is an
//! `FnOnce`, so it runs exactly once and before `lookup_with` returns.

use crate::allowlist::AllowList;
use crate::error::{NameCheckError, Result};

/// Value reported on a successful lookup.
pub const FOUND: &str = "found";

/// Either `Ok(FOUND)` or `Err(NameCheckError::NameNotFound)`.
pub type LookupOutcome = Result<&'static str>;

/// Look `name` up in the default allow-list.
///
/// The list is built fresh for every call and dropped on return.
pub fn lookup(name: &str) -> LookupOutcome {
    lookup_in(&AllowList::default(), name)
}

/// Look `name` up in an explicit allow-list.
pub fn lookup_in(list: &AllowList, name: &str) -> LookupOutcome {
    if list.contains(name) {
        Ok(FOUND)
    } else {
        Err(NameCheckError::NameNotFound)
    }
}

/// Error-first callback form of [`lookup`].
///
/// Returns whatever the callback returns.
pub fn lookup_with<R, F>(name: &str, callback: F) -> R
where
    F: FnOnce(LookupOutcome) -> R,
{
    callback(lookup(name))
}
