// crates/cityfind-core/src/text.rs
//! Text normalization shared by the catalog, the alias table and every query.
//!
//! There is exactly one place that knows how to clean user input and how to
//! strip the country disambiguation token (`"London UK"` → `"London"`).

use crate::error::{CityError, Result};

/// Disambiguation tokens the shipped dataset uses (`"Newcastle AU"`, `"Valencia VE"`, ...).
pub const DEFAULT_SUFFIXES: [&str; 6] = ["UK", "CA", "US", "AU", "CL", "VE"];

/// Convert a string into a folded key suitable for accent-insensitive comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use cityfind_core::text::fold_key;
///
/// assert_eq!(fold_key("Düsseldorf"), "dusseldorf");
/// assert_eq!(fold_key("Łódź"), "lodz");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).trim().to_lowercase()
}

/// Lowercased text with whitespace runs collapsed; suffixes are kept.
///
/// Tells apart catalog entries that share a [`Normalizer::key`]
/// (`"London"` / `"London UK"`).
///
/// ```rust
/// use cityfind_core::text::literal_key;
///
/// assert_eq!(literal_key("  London   UK "), "london uk");
/// ```
pub fn literal_key(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Comparison forms of one query: the matching key and the literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryKey {
    pub key: String,
    pub literal: String,
}

/// Number of Unicode scalar values in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Cleans query and catalog text.
///
/// Two pure transforms are exposed:
/// - [`Normalizer::normalize`] — trim, lowercase, strip a trailing
///   disambiguation token. Used for every comparison.
/// - [`Normalizer::display`] — strip the token but keep the original case.
///   Used for presentation only, never compared against input.
///
/// # Examples
///
/// ```rust
/// use cityfind_core::text::Normalizer;
///
/// let n = Normalizer::default();
/// assert_eq!(n.normalize("  London UK "), "london");
/// assert_eq!(n.display("London UK"), "London");
/// assert_eq!(n.normalize("UK"), "uk");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    /// Lowercased tokens.
    suffixes: Vec<String>,
    fold_diacritics: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_lowercase()).collect(),
            fold_diacritics: false,
        }
    }
}

impl Normalizer {
    /// Build a normalizer for a custom suffix set.
    ///
    /// Each suffix must be a single non-empty token without whitespace.
    pub fn new<S: AsRef<str>>(suffixes: &[S]) -> Result<Self> {
        let mut out: Vec<String> = Vec::with_capacity(suffixes.len());
        for s in suffixes {
            let raw = s.as_ref();
            let token = raw.trim();
            if token.is_empty() || token.chars().any(char::is_whitespace) {
                return Err(CityError::InvalidSuffix(raw.to_string()));
            }
            let token = token.to_lowercase();
            if !out.contains(&token) {
                out.push(token);
            }
        }
        Ok(Self {
            suffixes: out,
            fold_diacritics: false,
        })
    }

    /// Additionally transliterate comparison keys to ASCII (see [`fold_key`]).
    pub fn with_fold_diacritics(mut self, fold: bool) -> Self {
        self.fold_diacritics = fold;
        self
    }

    pub fn fold_diacritics(&self) -> bool {
        self.fold_diacritics
    }

    /// The configured suffix tokens, lowercased.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Trim, lowercase and strip the trailing disambiguation token.
    ///
    /// Idempotent: `normalize(normalize(s)) == normalize(s)`. A lone token
    /// (`"uk"`) is a name, not a suffix, and is kept.
    pub fn normalize(&self, s: &str) -> String {
        let lowered = s.trim().to_lowercase();
        self.strip_suffix(&lowered).to_string()
    }

    /// Suffix-stripped form for rendering; case is preserved.
    pub fn display<'a>(&self, s: &'a str) -> &'a str {
        self.strip_suffix(s.trim())
    }

    /// The key used for every comparison: [`Self::normalize`], followed by
    /// ASCII folding when enabled.
    pub fn key(&self, s: &str) -> String {
        let normalized = self.normalize(s);
        if self.fold_diacritics {
            fold_key(&normalized)
        } else {
            normalized
        }
    }

    /// Both forms of `s` the matcher needs.
    pub fn query(&self, s: &str) -> QueryKey {
        QueryKey {
            key: self.key(s),
            literal: literal_key(s),
        }
    }

    /// Whether `token` is one of the disambiguation suffixes (ASCII case-insensitive).
    pub fn is_suffix(&self, token: &str) -> bool {
        self.suffixes
            .iter()
            .any(|s| s.eq_ignore_ascii_case(token) || *s == token.to_lowercase())
    }

    // Repeats until no token is left so a doubled suffix ("x uk uk") still
    // normalizes to a fixed point.
    fn strip_suffix<'a>(&self, s: &'a str) -> &'a str {
        let mut rest = s;
        while let Some((head, tail)) = rest.rsplit_once(char::is_whitespace) {
            let head = head.trim_end();
            if head.is_empty() || !self.is_suffix(tail) {
                break;
            }
            rest = head;
        }
        rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        let n = Normalizer::default();
        assert_eq!(n.normalize("  MosCOW\t"), "moscow");
        assert_eq!(n.normalize("Москва"), "москва");
        assert_eq!(n.normalize(""), "");
        assert_eq!(n.normalize("   "), "");
    }

    #[test]
    fn normalize_strips_one_trailing_suffix() {
        let n = Normalizer::default();
        assert_eq!(n.normalize("Newcastle AU"), "newcastle");
        assert_eq!(n.normalize("san antonio cl"), "san antonio");
        assert_eq!(n.normalize("Valencia   VE"), "valencia");
        // not a trailing token
        assert_eq!(n.normalize("Ukiah"), "ukiah");
        assert_eq!(n.normalize("UK London"), "uk london");
    }

    #[test]
    fn lone_suffix_is_kept() {
        let n = Normalizer::default();
        assert_eq!(n.normalize("UK"), "uk");
        assert_eq!(n.normalize("  ca "), "ca");
    }

    #[test]
    fn normalize_is_idempotent() {
        let n = Normalizer::default();
        for s in [
            "London UK",
            "  x uk uk ",
            "Saint-Étienne",
            "uk",
            "La Chaux-de-Fonds",
            "São Paulo",
            "",
            "a  VE",
        ] {
            let once = n.normalize(s);
            assert_eq!(n.normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn display_keeps_case() {
        let n = Normalizer::default();
        assert_eq!(n.display("London UK"), "London");
        assert_eq!(n.display("San Antonio CL"), "San Antonio");
        assert_eq!(n.display("Düsseldorf"), "Düsseldorf");
        assert_eq!(n.display("UK"), "UK");
    }

    #[test]
    fn key_folds_only_when_enabled() {
        let plain = Normalizer::default();
        assert_eq!(plain.key("Düsseldorf"), "düsseldorf");

        let folding = Normalizer::default().with_fold_diacritics(true);
        assert_eq!(folding.key("Düsseldorf"), "dusseldorf");
        assert_eq!(folding.key("Kraków PL"), "krakow pl");
    }

    #[test]
    fn query_keeps_literal_text() {
        let n = Normalizer::default();
        let q = n.query(" London  UK");
        assert_eq!(q.key, "london");
        assert_eq!(q.literal, "london uk");
    }

    #[test]
    fn custom_suffixes_are_validated() {
        assert!(Normalizer::new(&["PL", "de"]).is_ok());
        assert!(matches!(
            Normalizer::new(&["P L"]),
            Err(CityError::InvalidSuffix(_))
        ));
        assert!(matches!(
            Normalizer::new(&[""]),
            Err(CityError::InvalidSuffix(_))
        ));

        let n = Normalizer::new(&["PL"]).unwrap();
        assert_eq!(n.normalize("Kraków PL"), "kraków");
        assert_eq!(n.normalize("London UK"), "london uk");
    }
}
