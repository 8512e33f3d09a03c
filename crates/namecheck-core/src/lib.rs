//! namecheck core: the allow-list, the lookup contract, and the shared error type.
//!
//! Lookups report exactly one outcome per call, either as a returned
//! [`LookupOutcome`] or through an error-first callback. This crate carries no
//! runtime dependencies so the runner and tests can drive it directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! Every non-member name surfaces as `NameCheckError::NameNotFound`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod allowlist;
pub mod error;
pub mod lookup;

pub use error::{ErrorCode, NameCheckError, Result};
pub use allowlist::AllowList;
pub use lookup::{lookup, lookup_in, lookup_with, LookupOutcome, FOUND};
