// crates/cityfind-core/src/catalog.rs
use crate::error::{CityError, Result};
use crate::text::{char_len, literal_key, Normalizer};
use serde::Serialize;

/// Position of a city in the [`Catalog`]. Stable for the lifetime of the index.
///
/// The catalog holds a few hundred to low thousands of entries, so u16 is plenty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CityId(pub u16);

impl CityId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One canonical city with its precomputed matching forms.
#[derive(Debug, Clone, Serialize)]
pub struct CityEntry {
    /// Canonical catalog string, e.g. `"London UK"`.
    pub name: String,
    /// Suffix-stripped, case-preserved form, e.g. `"London"`.
    pub display: String,
    /// Comparison key, e.g. `"london"`.
    pub key: String,
    /// Lowercased full name, e.g. `"london uk"`.
    pub literal: String,
    /// Length of `display` in chars; gates the fuzzy tier.
    pub display_len: usize,
}

/// Immutable, alphabetically sorted list of canonical city names.
///
/// Built once at startup; entries are pairwise distinct.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    entries: Vec<CityEntry>,
}

impl Catalog {
    /// Sort, validate and precompute keys.
    ///
    /// Fails on an empty name or on any duplicate: silent duplicates would
    /// break the no-duplicate guarantee of search results.
    pub fn new<S: AsRef<str>>(names: &[S], normalizer: &Normalizer) -> Result<Self> {
        let mut names: Vec<&str> = names.iter().map(|s| s.as_ref()).collect();
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err(CityError::EmptyCity);
        }
        if names.len() > u16::MAX as usize {
            return Err(CityError::CatalogTooLarge(names.len()));
        }
        names.sort_unstable();
        if let Some(pair) = names.windows(2).find(|w| w[0] == w[1]) {
            return Err(CityError::DuplicateCity(pair[0].to_string()));
        }

        let entries = names
            .into_iter()
            .map(|name| {
                let display = normalizer.display(name).to_string();
                CityEntry {
                    key: normalizer.key(name),
                    literal: literal_key(name),
                    display_len: char_len(&display),
                    display,
                    name: name.to_string(),
                }
            })
            .collect();

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: CityId) -> &CityEntry {
        &self.entries[id.index()]
    }

    pub fn name(&self, id: CityId) -> &str {
        &self.entries[id.index()].name
    }

    /// Look up a canonical name (exact, case-sensitive).
    pub fn find(&self, name: &str) -> Option<CityId> {
        self.entries
            .binary_search_by(|e| e.name.as_str().cmp(name))
            .ok()
            .map(|i| CityId(i as u16))
    }

    /// All entries in catalog order, with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (CityId, &CityEntry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (CityId(i as u16), e))
    }
}
