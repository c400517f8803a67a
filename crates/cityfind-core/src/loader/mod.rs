// crates/cityfind-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (embedded bytes, files, gzip) and hands the
//! parsed [`DatasetRaw`](crate::raw::DatasetRaw) to the index builder.

use crate::index::CityIndex;
#[cfg(feature = "json")]
use {
    crate::{config::MatchConfig, error::Result},
    once_cell::sync::OnceCell,
    std::path::Path,
};

mod common_io;
#[cfg(feature = "json")]
mod json;

pub use common_io::open_stream;

/// The dataset shipped with the crate.
#[cfg(feature = "json")]
pub const EMBEDDED_DATASET: &str = include_str!("../../data/cities.json");

// Single in-process index so the embedded dataset is parsed and validated once.
#[cfg(feature = "json")]
static CITY_INDEX: OnceCell<CityIndex> = OnceCell::new();

impl CityIndex {
    /// The process-wide index over the embedded dataset with the default
    /// [`MatchConfig`]. Built on first use, then shared.
    #[cfg(feature = "json")]
    pub fn load() -> Result<&'static CityIndex> {
        CITY_INDEX.get_or_try_init(|| Self::embedded(MatchConfig::default()))
    }

    /// A fresh index over the embedded dataset with a custom config.
    #[cfg(feature = "json")]
    pub fn embedded(config: MatchConfig) -> Result<Self> {
        Self::from_json_str(EMBEDDED_DATASET, config)
    }

    /// Parse a dataset document (see `data/cities.json` for the shape).
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str, config: MatchConfig) -> Result<Self> {
        let raw = json::parse_str(s)?;
        Self::from_raw(raw, config)
    }

    /// Load a dataset file; `.json.gz` is accepted with the `compact` feature.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<Path>, config: MatchConfig) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let raw = json::parse_reader(reader)?;
        tracing::info!(path = %path.display(), "dataset loaded");
        Self::from_raw(raw, config)
    }
}
