// crates/cityfind-core/src/raw.rs
use crate::text::DEFAULT_SUFFIXES;
use serde::{Deserialize, Serialize};

/// Dataset as it is stored on disk (`data/cities.json`).
///
/// `aliases` is an ordered list of `[alias, canonical]` pairs; the order is
/// the scan order of the alias-substring pass. Validation happens when the
/// raw data is turned into a [`CityIndex`](crate::CityIndex).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRaw {
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,
    pub cities: Vec<String>,
    #[serde(default)]
    pub popular: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<(String, String)>,
}

fn default_suffixes() -> Vec<String> {
    DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect()
}
