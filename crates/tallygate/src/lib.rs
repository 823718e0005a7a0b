//! Top-level facade crate for tallygate.
//!
//! Re-exports the core gate and error types so users can depend on a single crate.

pub mod core {
    pub use tallygate_core::*;
}

pub use tallygate_core::{ErrorKind, Result, Tally, TallyError};
