//! Deterministic noise functions.

mod mixer;
pub use mixer::*;
