// crates/cityfind-core/src/matcher.rs
//! The six ordered matching passes.
//!
//! Every pass only contributes cities not already produced by an earlier
//! pass, keeping its own internal order. The union is the matcher output;
//! capping happens in [`CityIndex`](crate::CityIndex).

use crate::alias::AliasTable;
use crate::catalog::{Catalog, CityId};
use crate::config::MatchConfig;
use crate::distance::levenshtein_within;
use crate::text::QueryKey;
use serde::Serialize;

/// Matching strategy that produced a candidate, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Query equals a catalog key.
    Exact,
    /// Query equals an alias key.
    AliasExact,
    /// Catalog key starts with the query.
    Prefix,
    /// Catalog key contains the query.
    Substring,
    /// Alias key contains the query.
    AliasSubstring,
    /// Catalog key within the configured edit distance.
    Fuzzy,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Exact => "exact",
            Tier::AliasExact => "alias-exact",
            Tier::Prefix => "prefix",
            Tier::Substring => "substring",
            Tier::AliasSubstring => "alias-substring",
            Tier::Fuzzy => "fuzzy",
        }
    }
}

/// One matched city. `distance` is only set for [`Tier::Fuzzy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchCandidate {
    pub city: CityId,
    pub tier: Tier,
    pub distance: Option<usize>,
}

/// Ordered set of candidates: first occurrence wins.
struct Accumulator {
    seen: Vec<bool>,
    out: Vec<MatchCandidate>,
}

impl Accumulator {
    fn new(catalog_len: usize) -> Self {
        Self {
            seen: vec![false; catalog_len],
            out: Vec::new(),
        }
    }

    fn contains(&self, city: CityId) -> bool {
        self.seen[city.index()]
    }

    fn push(&mut self, city: CityId, tier: Tier, distance: Option<usize>) {
        if !self.seen[city.index()] {
            self.seen[city.index()] = true;
            self.out.push(MatchCandidate {
                city,
                tier,
                distance,
            });
        }
    }
}

/// Runs the tiered passes over a catalog and alias table.
///
/// All inputs are borrowed; the matcher holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct TieredMatcher<'a> {
    catalog: &'a Catalog,
    aliases: &'a AliasTable,
    config: &'a MatchConfig,
}

impl<'a> TieredMatcher<'a> {
    pub fn new(catalog: &'a Catalog, aliases: &'a AliasTable, config: &'a MatchConfig) -> Self {
        Self {
            catalog,
            aliases,
            config,
        }
    }

    /// Pass 1: the catalog entry whose key equals the query key.
    ///
    /// Among entries sharing the key, the one whose full name is the literal
    /// query wins (`"london uk"` → `London UK`); otherwise the first in
    /// catalog order.
    pub fn exact(&self, query: &QueryKey) -> Option<CityId> {
        if query.key.is_empty() {
            return None;
        }
        let mut first = None;
        for (id, e) in self.catalog.iter().filter(|(_, e)| e.key == query.key) {
            if e.literal == query.literal {
                return Some(id);
            }
            first.get_or_insert(id);
        }
        first
    }

    /// Pass 2: exact alias lookup.
    pub fn alias_exact(&self, key: &str) -> Option<CityId> {
        if key.is_empty() {
            return None;
        }
        self.aliases.resolve(key)
    }

    /// Run all passes on an already-normalized query.
    ///
    /// With `limit`, the fuzzy pass is skipped once earlier passes filled the
    /// cap; the truncated result is the same either way.
    pub fn run(&self, query: &QueryKey, limit: Option<usize>) -> Vec<MatchCandidate> {
        let key = query.key.as_str();
        if key.is_empty() {
            return Vec::new();
        }
        let mut acc = Accumulator::new(self.catalog.len());

        let exact = self.exact(query);
        if let Some(id) = exact {
            acc.push(id, Tier::Exact, None);
        }
        let alias = self.alias_exact(key);
        if let Some(id) = alias {
            acc.push(id, Tier::AliasExact, None);
        }

        for (id, entry) in self.catalog.iter() {
            if entry.key.starts_with(key) {
                acc.push(id, Tier::Prefix, None);
            }
        }
        for (id, entry) in self.catalog.iter() {
            if entry.key.contains(key) {
                acc.push(id, Tier::Substring, None);
            }
        }
        for entry in self.aliases.iter() {
            if entry.key.contains(key) {
                acc.push(entry.city, Tier::AliasSubstring, None);
            }
        }

        // fuzzy never runs once pass 1 or 2 resolved the query
        let resolved = exact.is_some() || alias.is_some();
        let full = limit.is_some_and(|l| acc.out.len() >= l);
        if !resolved && !full {
            for (id, distance) in self.fuzzy(key, &acc) {
                acc.push(id, Tier::Fuzzy, Some(distance));
            }
        }

        acc.out
    }

    /// Pass 6: unmatched cities with a long enough display name within the
    /// distance bound, nearest first; ties keep catalog order.
    fn fuzzy(&self, key: &str, acc: &Accumulator) -> Vec<(CityId, usize)> {
        let max = self.config.max_fuzzy_distance;
        let mut hits: Vec<(CityId, usize)> = self
            .catalog
            .iter()
            .filter(|(id, e)| !acc.contains(*id) && e.display_len > self.config.min_fuzzy_display_len)
            .filter_map(|(id, e)| levenshtein_within(key, &e.key, max).map(|d| (id, d)))
            .collect();
        hits.sort_by_key(|&(_, d)| d);
        hits
    }
}
