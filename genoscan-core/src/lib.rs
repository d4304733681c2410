//! Shared primitives and traits for the genoscan engine.
//!
//! `genoscan-core` is the foundation the sequence and alignment crates build on:
//!
//! - **Error types**: [`GenoscanError`] and [`Result`] for structured error handling
//! - **Traits**: [`Symbol`] for alignable residues, [`Sequence`] for typed
//!   containers, plus [`Scored`] and [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{GenoscanError, Result};
pub use traits::*;
