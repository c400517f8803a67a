// crates/cityfind-core/src/alias.rs
//! Colloquial and foreign names (`"Питер"`, `"NYC"`, `"Big Apple"`) mapped to
//! canonical catalog entries.

use crate::catalog::{Catalog, CityId};
use crate::error::{CityError, Result};
use crate::text::Normalizer;
use std::collections::HashMap;
use tracing::warn;

/// One alias as written in the dataset, with its comparison key.
#[derive(Debug, Clone)]
pub struct AliasEntry {
    pub alias: String,
    pub key: String,
    pub city: CityId,
}

/// Many-to-one map from alias keys to catalog cities.
///
/// Every key resolves to exactly one city. Dataset order is preserved for the
/// substring scan.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
    by_key: HashMap<String, CityId>,
}

impl AliasTable {
    /// Build the table, validating every target against `catalog`.
    ///
    /// A repeated `(alias, city)` pair is collapsed; the same alias pointing
    /// at two different cities is rejected.
    pub fn new<A, C>(pairs: &[(A, C)], catalog: &Catalog, normalizer: &Normalizer) -> Result<Self>
    where
        A: AsRef<str>,
        C: AsRef<str>,
    {
        let mut table = Self::default();
        for (alias, canonical) in pairs {
            let (alias, canonical) = (alias.as_ref(), canonical.as_ref());
            let city = catalog
                .find(canonical)
                .ok_or_else(|| CityError::UnknownAliasTarget {
                    alias: alias.to_string(),
                    canonical: canonical.to_string(),
                })?;
            let key = normalizer.key(alias);
            if key.is_empty() {
                return Err(CityError::EmptyAlias(alias.to_string()));
            }

            match table.by_key.get(&key) {
                Some(&existing) if existing == city => {
                    warn!(alias, canonical, "repeated alias ignored");
                    continue;
                }
                Some(&existing) => {
                    return Err(CityError::ConflictingAlias {
                        alias: alias.to_string(),
                        first: catalog.name(existing).to_string(),
                        second: canonical.to_string(),
                    });
                }
                None => {}
            }

            table.by_key.insert(key.clone(), city);
            table.entries.push(AliasEntry {
                alias: alias.to_string(),
                key,
                city,
            });
        }
        Ok(table)
    }

    /// Exact lookup of an already-normalized query. No partial matching.
    pub fn resolve(&self, key: &str) -> Option<CityId> {
        self.by_key.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AliasEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Catalog, Normalizer) {
        let n = Normalizer::default();
        let c = Catalog::new(&["Moscow", "New York", "Saint Petersburg"], &n).unwrap();
        (c, n)
    }

    #[test]
    fn resolves_case_insensitively() {
        let (catalog, n) = setup();
        let table = AliasTable::new(
            &[("Москва", "Moscow"), ("NYC", "New York"), ("Питер", "Saint Petersburg")],
            &catalog,
            &n,
        )
        .unwrap();

        let moscow = catalog.find("Moscow");
        assert_eq!(table.resolve(&n.key("МОСКВА")), moscow);
        assert_eq!(table.resolve(&n.key("nyc")), catalog.find("New York"));
        assert_eq!(table.resolve(&n.key("Моск")), None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn unknown_target_fails() {
        let (catalog, n) = setup();
        let err = AliasTable::new(&[("Прага", "Prague")], &catalog, &n).unwrap_err();
        assert!(matches!(err, CityError::UnknownAliasTarget { ref canonical, .. } if canonical == "Prague"));
    }

    #[test]
    fn repeated_pair_is_collapsed() {
        let (catalog, n) = setup();
        let table = AliasTable::new(
            &[("Big Apple", "New York"), ("big apple", "New York")],
            &catalog,
            &n,
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.iter().next().map(|e| e.alias.as_str()), Some("Big Apple"));
    }

    #[test]
    fn conflicting_alias_fails() {
        let (catalog, n) = setup();
        let err = AliasTable::new(&[("SP", "Saint Petersburg"), ("sp", "Moscow")], &catalog, &n)
            .unwrap_err();
        assert!(matches!(err, CityError::ConflictingAlias { .. }));
    }
}
