// crates/cityfind-core/src/config.rs
use serde::{Deserialize, Serialize};

/// Result cap for general search (home search, dashboard city field).
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
/// Result cap for the browse page's "suggested cities" list.
pub const DEFAULT_SUGGEST_LIMIT: usize = 20;
/// Delay between blur and closing the dropdown, so a click on a suggestion lands first.
pub const DEFAULT_BLUR_DELAY_MS: u64 = 200;

/// Tunables for the tiered matcher.
///
/// The defaults reproduce the reference matching behaviour exactly;
/// `fold_diacritics` is opt-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Largest edit distance the fuzzy tier accepts.
    pub max_fuzzy_distance: usize,
    /// The fuzzy tier only considers cities whose display name is longer than this.
    pub min_fuzzy_display_len: usize,
    /// Transliterate comparison keys to ASCII (`dusseldorf` finds `Düsseldorf`).
    pub fold_diacritics: bool,
    pub search_limit: usize,
    pub suggest_limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_fuzzy_distance: 2,
            min_fuzzy_display_len: 3,
            fold_diacritics: false,
            search_limit: DEFAULT_SEARCH_LIMIT,
            suggest_limit: DEFAULT_SUGGEST_LIMIT,
        }
    }
}

/// Per-input-field settings for [`SearchSession`](crate::session::SearchSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Candidate cap while typing and for the focus-on-empty popular list.
    pub limit: usize,
    pub blur_delay_ms: u64,
    /// Treat an exact alias hit like an exact catalog hit: no dropdown.
    pub alias_aware_exact: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_LIMIT,
            blur_delay_ms: DEFAULT_BLUR_DELAY_MS,
            alias_aware_exact: true,
        }
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    #[test]
    fn partial_match_config_keeps_defaults() {
        let config: MatchConfig =
            serde_json::from_str(r#"{ "search_limit": 5, "suggest_limit": 8 }"#).unwrap();
        assert_eq!(config.search_limit, 5);
        assert_eq!(config.suggest_limit, 8);
        assert_eq!(config.max_fuzzy_distance, 2);
        assert!(!config.fold_diacritics);
    }

    #[test]
    fn session_config_defaults() {
        let config: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.blur_delay_ms, 200);
    }
}
