// crates/cityfind-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded index.
///
/// Returned by [`CityIndex::stats`](crate::CityIndex::stats); counts reflect
/// the validated index, after repeated alias pairs were collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub cities: usize,
    pub aliases: usize,
    pub popular: usize,
    pub suffixes: usize,
}
