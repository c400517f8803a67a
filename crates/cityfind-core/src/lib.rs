// crates/cityfind-core/src/lib.rs
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Resolve free-text city input (typos, partial words, foreign-language
//! names) to canonical catalog entries, and drive autocomplete widgets.
//!
//! ```rust
//! use cityfind_core::CityIndex;
//!
//! let index = CityIndex::load()?;
//! assert_eq!(index.search("Москва", 10)[0], "Moscow");
//! assert!(index.search("Pheonix", 10).contains(&"Phoenix"));
//! # Ok::<(), cityfind_core::CityError>(())
//! ```

pub mod alias;
pub mod catalog;
pub mod common;
pub mod config;
pub mod distance;
pub mod error;
pub mod index;
pub mod loader;
pub mod matcher;
// Shared raw input of the dataset loaders
#[doc(hidden)]
pub mod raw;
pub mod session;
pub mod text;

// Re-exports
pub use crate::alias::AliasTable;
pub use crate::catalog::{Catalog, CityId};
pub use crate::common::IndexStats;
pub use crate::config::{MatchConfig, SessionConfig};
pub use crate::distance::levenshtein;
pub use crate::error::{CityError, Result};
pub use crate::index::{CityIndex, CityIndexBuilder};
pub use crate::matcher::{MatchCandidate, Tier, TieredMatcher};
pub use crate::raw::DatasetRaw;
pub use crate::session::{Key, Router, SearchSession, SessionState};
pub use crate::text::{fold_key, literal_key, Normalizer, QueryKey};
