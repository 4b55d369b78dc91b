//! Collections module
//!
//! Lookup structures derived from snapshots. They are pure projections of
//! their inputs and are never mutated after construction.

pub mod family_index;
pub use family_index::*;
