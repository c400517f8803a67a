// crates/cityfind-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading a dataset or building a [`CityIndex`].
///
/// Matching itself never fails: an unresolvable query is an empty result,
/// not an error. Everything here happens once, at startup.
///
/// [`CityIndex`]: crate::CityIndex
#[derive(Debug, Error)]
pub enum CityError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("unsupported dataset: {0}")]
    Unsupported(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog contains an empty city name")]
    EmptyCity,

    #[error("catalog has {0} entries; at most 65535 are supported")]
    CatalogTooLarge(usize),

    #[error("catalog contains duplicate city: {0:?}")]
    DuplicateCity(String),

    #[error("alias {alias:?} points to {canonical:?}, which is not in the catalog")]
    UnknownAliasTarget { alias: String, canonical: String },

    #[error("alias {alias:?} maps to both {first:?} and {second:?}")]
    ConflictingAlias {
        alias: String,
        first: String,
        second: String,
    },

    #[error("alias {0:?} is empty after normalization")]
    EmptyAlias(String),

    #[error("popular city {0:?} is not in the catalog")]
    UnknownPopularCity(String),

    #[error("invalid disambiguation suffix {0:?}: must be a single non-empty token")]
    InvalidSuffix(String),
}

pub type Result<T> = std::result::Result<T, CityError>;
