// crates/cityfind-core/src/index.rs
//! The public face of the engine: a validated, immutable index over the
//! catalog, alias table and popular-cities list.

use crate::alias::AliasTable;
use crate::catalog::{Catalog, CityId};
use crate::common::IndexStats;
use crate::config::MatchConfig;
use crate::error::{CityError, Result};
use crate::matcher::{MatchCandidate, Tier, TieredMatcher};
use crate::raw::DatasetRaw;
use crate::text::{Normalizer, DEFAULT_SUFFIXES};
use tracing::{debug, info};

/// Read-only city resolution index. Built once, shared by reference.
///
/// # Examples
///
/// ```rust
/// use cityfind_core::CityIndex;
///
/// let index = CityIndex::builder()
///     .cities(["London", "London UK", "Moscow", "Phoenix"])
///     .alias("Москва", "Moscow")
///     .popular(["London", "Moscow"])
///     .build()
///     .unwrap();
///
/// assert_eq!(index.search("moscow", 10), ["Moscow"]);
/// assert_eq!(index.search("Москва", 10), ["Moscow"]);
/// assert_eq!(index.search("lon", 10), ["London", "London UK"]);
/// assert_eq!(index.search("", 1), ["London"]);
/// assert!(index.is_exact_match("MOSCOW"));
/// ```
#[derive(Debug, Clone)]
pub struct CityIndex {
    normalizer: Normalizer,
    catalog: Catalog,
    aliases: AliasTable,
    popular: Vec<CityId>,
    config: MatchConfig,
}

impl CityIndex {
    pub fn builder() -> CityIndexBuilder {
        CityIndexBuilder::default()
    }

    /// Validate raw dataset content and build the index.
    pub fn from_raw(raw: DatasetRaw, config: MatchConfig) -> Result<Self> {
        CityIndexBuilder {
            suffixes: raw.suffixes,
            cities: raw.cities,
            aliases: raw.aliases,
            popular: raw.popular,
            config,
        }
        .build()
    }

    // -----------------------------------------------------------------------
    // Resolution API
    // -----------------------------------------------------------------------

    /// Ordered canonical city names for `query`, at most `limit` of them.
    ///
    /// An empty (or whitespace-only) query returns [`Self::popular_cities`].
    /// Results never contain duplicates; a query that matches nothing yields
    /// an empty list.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&str> {
        if query.trim().is_empty() {
            return self.popular_cities(limit);
        }
        self.match_candidates(query, Some(limit))
            .into_iter()
            .take(limit)
            .map(|c| self.catalog.name(c.city))
            .collect()
    }

    /// [`Self::search`] for callers that may hold no input at all; `None` is
    /// treated as the empty query.
    pub fn search_opt(&self, query: Option<&str>, limit: usize) -> Vec<&str> {
        self.search(query.unwrap_or_default(), limit)
    }

    /// Tiered candidates with tier and distance, uncapped unless `limit` is
    /// given. Empty for an empty query: popular cities are not a tier.
    pub fn match_candidates(&self, query: &str, limit: Option<usize>) -> Vec<MatchCandidate> {
        let q = self.normalizer.query(query);
        let out = self.matcher().run(&q, limit);
        let fuzzy = out.iter().filter(|c| c.tier == Tier::Fuzzy).count();
        debug!(query, key = %q.key, candidates = out.len(), fuzzy, "search");
        out
    }

    /// `true` iff pass 1 (exact catalog match) yields a result.
    ///
    /// UI callers use this to suppress the suggestion dropdown outright.
    pub fn is_exact_match(&self, query: &str) -> bool {
        self.matcher().exact(&self.normalizer.query(query)).is_some()
    }

    /// Alias-aware variant of [`Self::is_exact_match`]: pass 1 or pass 2.
    pub fn is_exact_match_with_aliases(&self, query: &str) -> bool {
        self.resolve(query).is_some()
    }

    /// Canonical city precisely identified by `query` (exact or alias-exact).
    pub fn resolve(&self, query: &str) -> Option<&str> {
        let q = self.normalizer.query(query);
        let m = self.matcher();
        m.exact(&q)
            .or_else(|| m.alias_exact(&q.key))
            .map(|id| self.catalog.name(id))
    }

    /// The curated popular-cities list, truncated to `limit`.
    pub fn popular_cities(&self, limit: usize) -> Vec<&str> {
        self.popular
            .iter()
            .take(limit)
            .map(|&id| self.catalog.name(id))
            .collect()
    }

    /// Suffix-stripped form of a city name for rendering (`"London UK"` → `"London"`).
    pub fn normalize_for_display<'a>(&self, city: &'a str) -> &'a str {
        self.normalizer.display(city)
    }

    /// The comparison form of arbitrary text (trim, lowercase, strip suffix).
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn matcher(&self) -> TieredMatcher<'_> {
        TieredMatcher::new(&self.catalog, &self.aliases, &self.config)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn city_name(&self, id: CityId) -> &str {
        self.catalog.name(id)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            cities: self.catalog.len(),
            aliases: self.aliases.len(),
            popular: self.popular.len(),
            suffixes: self.normalizer.suffixes().len(),
        }
    }
}

/// Collects static configuration data and validates it in [`Self::build`].
#[derive(Debug, Clone)]
pub struct CityIndexBuilder {
    suffixes: Vec<String>,
    cities: Vec<String>,
    aliases: Vec<(String, String)>,
    popular: Vec<String>,
    config: MatchConfig,
}

impl Default for CityIndexBuilder {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            cities: Vec::new(),
            aliases: Vec::new(),
            popular: Vec::new(),
            config: MatchConfig::default(),
        }
    }
}

impl CityIndexBuilder {
    pub fn cities<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cities.extend(cities.into_iter().map(Into::into));
        self
    }

    pub fn alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), canonical.into()));
        self
    }

    pub fn aliases<I, A, C>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, C)>,
        A: Into<String>,
        C: Into<String>,
    {
        self.aliases
            .extend(pairs.into_iter().map(|(a, c)| (a.into(), c.into())));
        self
    }

    pub fn popular<I, S>(mut self, popular: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.popular.extend(popular.into_iter().map(Into::into));
        self
    }

    /// Replace the disambiguation suffix set (default: [`DEFAULT_SUFFIXES`]).
    pub fn suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate everything and freeze the index. Fails fast on any
    /// inconsistency in the data; see [`CityError`].
    pub fn build(self) -> Result<CityIndex> {
        let normalizer =
            Normalizer::new(&self.suffixes)?.with_fold_diacritics(self.config.fold_diacritics);
        let catalog = Catalog::new(&self.cities, &normalizer)?;
        let aliases = AliasTable::new(&self.aliases, &catalog, &normalizer)?;
        let popular = self
            .popular
            .iter()
            .map(|p| {
                catalog
                    .find(p)
                    .ok_or_else(|| CityError::UnknownPopularCity(p.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            cities = catalog.len(),
            aliases = aliases.len(),
            popular = popular.len(),
            fold_diacritics = self.config.fold_diacritics,
            "city index built"
        );

        Ok(CityIndex {
            normalizer,
            catalog,
            aliases,
            popular,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> CityIndex {
        CityIndex::builder()
            .cities([
                "Berlin", "Düsseldorf", "London", "London UK", "Long Beach", "Moscow", "Phoenix",
                "Phuket", "Saint Petersburg",
            ])
            .aliases([("Москва", "Moscow"), ("Питер", "Saint Petersburg"), ("SPb", "Saint Petersburg")])
            .popular(["London", "Moscow", "Berlin"])
            .build()
            .unwrap()
    }

    #[test]
    fn empty_query_returns_popular() {
        let idx = index();
        assert_eq!(idx.search("", 10), ["London", "Moscow", "Berlin"]);
        assert_eq!(idx.search("   ", 2), ["London", "Moscow"]);
        assert_eq!(idx.search("", 2), idx.popular_cities(2));
        assert_eq!(idx.search_opt(None, 10), idx.popular_cities(10));
    }

    #[test]
    fn search_is_capped() {
        let idx = index();
        assert_eq!(idx.search("o", 2).len(), 2);
        assert!(idx.search("o", 0).is_empty());
    }

    #[test]
    fn exact_match_flags() {
        let idx = index();
        assert!(idx.is_exact_match("Moscow"));
        assert!(idx.is_exact_match("  london uk "));
        assert!(!idx.is_exact_match("Москва"));
        assert!(idx.is_exact_match_with_aliases("Москва"));
        assert!(!idx.is_exact_match("mosc"));
    }

    #[test]
    fn resolve_prefers_catalog_then_alias() {
        let idx = index();
        assert_eq!(idx.resolve("london uk"), Some("London UK"));
        assert_eq!(idx.resolve("London"), Some("London"));
        assert_eq!(idx.resolve("spb"), Some("Saint Petersburg"));
        assert_eq!(idx.resolve("spbx"), None);
    }

    #[test]
    fn display_strips_suffix() {
        let idx = index();
        assert_eq!(idx.normalize_for_display("London UK"), "London");
        assert_eq!(idx.normalize_for_display("Moscow"), "Moscow");
    }

    #[test]
    fn candidates_carry_tiers() {
        let idx = index();
        let c = idx.match_candidates("Pheonix", None);
        assert_eq!(c.len(), 1);
        assert_eq!(idx.city_name(c[0].city), "Phoenix");
        assert_eq!(c[0].tier, Tier::Fuzzy);
        assert_eq!(c[0].distance, Some(2));
    }

    #[test]
    fn fold_diacritics_is_opt_in() {
        let plain = index().match_candidates("dusseldorf", None);
        assert_eq!(plain[0].tier, Tier::Fuzzy);
        assert_eq!(plain[0].distance, Some(1));

        let folded = CityIndex::builder()
            .cities(["Düsseldorf", "Dortmund"])
            .config(MatchConfig {
                fold_diacritics: true,
                ..MatchConfig::default()
            })
            .build()
            .unwrap();
        assert_eq!(folded.search("dusseldorf", 10), ["Düsseldorf"]);
        assert!(folded.is_exact_match("DUSSELDORF"));
    }

    #[test]
    fn unknown_popular_city_fails() {
        let err = CityIndex::builder()
            .cities(["Berlin"])
            .popular(["Prague"])
            .build()
            .unwrap_err();
        assert!(matches!(err, CityError::UnknownPopularCity(ref p) if p == "Prague"));
    }

    #[test]
    fn stats_count_validated_data() {
        let s = index().stats();
        assert_eq!(s.cities, 9);
        assert_eq!(s.aliases, 3);
        assert_eq!(s.popular, 3);
        assert_eq!(s.suffixes, 6);
    }
}
