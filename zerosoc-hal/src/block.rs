//! Non-blocking results, and a way to block on them.
//!
//! This is a re-export of the [nb] crate.

pub use nb::{block, Error, Result};
