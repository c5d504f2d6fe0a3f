//! High-level tensor operations.
//!
//! Operations follow a two-level dispatch:
//!
//! ```text
//! Level 1: allocate output, validate     → permutedims
//! Level 2: write into preallocated dest  → permutedims_into (backend)
//! ```

mod permutedims;

pub use permutedims::{permutedims, permutedims_into};
