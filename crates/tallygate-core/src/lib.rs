//! tallygate core: the invocation-counting gate and its error surface.
//!
//! This crate defines the gate state machine and the errors it can surface.
//! It intentionally carries no runtime or transport dependencies so it can be
//! used from any context, sync or async, test harness or production code.
//!
//! # Usage
//!
//! ```rust
//! use tallygate_core::Tally;
//!
//! let mut gate: Tally<&str> = Tally::with_callback(2, || println!("all signals in"))?;
//! gate.record_with("first")?;
//! gate.record()?;
//! assert!(gate.is_complete());
//! # Ok::<(), tallygate_core::TallyError>(())
//! ```
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TallyError`/`Result` so a misused gate
//! reports the misuse instead of crashing the caller.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod tally;

pub use error::{ErrorKind, Result, TallyError};
pub use tally::Tally;
