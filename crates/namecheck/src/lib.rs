//! Top-level facade crate for namecheck.
//!
//! Re-exports the core types and the runner library so users can depend on a single crate.

pub mod core {
    pub use namecheck_core::*;
}

pub mod runner {
    pub use namecheck_runner::*;
}
