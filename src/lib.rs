//! Umbrella crate for the demos; everything lives in `cityfind-core`.
pub use cityfind_core::*;
