// crates/cityfind-core/src/session.rs
//! Autocomplete session: the per-input-field state machine UI widgets drive.
//!
//! ```text
//!            keystroke with results / focus
//!   Idle ─────────────────────────────────────▶ Suggesting
//!    ▲  ◀── Escape / blur timeout / first Enter ──┘  │
//!    │                                               │ Enter on cursor, second Enter, click
//!    └──────────────── Committed ◀────────────────────┘
//! ```
//!
//! `Committed` is transient: the router is signalled and the session is back
//! in `Idle` before the handler returns, with the committed display text kept
//! in the input.

use crate::config::SessionConfig;
use crate::index::CityIndex;
use serde::Serialize;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    Suggesting,
    Committed,
}

impl SessionState {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Suggesting => "suggesting",
            SessionState::Committed => "committed",
        }
    }
}

/// Keys the session reacts to; everything else is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// The navigation collaborator, told which canonical city was committed
/// (e.g. to build a "browse by city" request).
pub trait Router {
    fn navigate(&mut self, city: &str);
}

impl<F: FnMut(&str)> Router for F {
    fn navigate(&mut self, city: &str) {
        self(city)
    }
}

/// State of one input field. Owned by exactly one widget; never shared.
///
/// # Examples
///
/// ```rust
/// use cityfind_core::session::{Key, SearchSession, SessionState};
/// use cityfind_core::CityIndex;
///
/// let index = CityIndex::builder().cities(["Phoenix", "Phuket"]).build().unwrap();
/// let mut committed = Vec::new();
/// let mut session = SearchSession::new(&index, |city: &str| committed.push(city.to_string()));
///
/// session.input("ph");
/// assert_eq!(session.candidates(), ["Phoenix", "Phuket"]);
///
/// // first Enter fills the input and closes the list
/// assert_eq!(session.key(Key::Enter), SessionState::Idle);
/// assert_eq!(session.query(), "Phoenix");
///
/// // second Enter commits
/// assert_eq!(session.key(Key::Enter), SessionState::Committed);
/// drop(session);
/// assert_eq!(committed, ["Phoenix"]);
/// ```
pub struct SearchSession<'a, R: Router> {
    index: &'a CityIndex,
    router: R,
    config: SessionConfig,
    query: String,
    candidates: Vec<&'a str>,
    cursor: isize,
    state: SessionState,
    /// Canonical city behind the current text: picked by a first Enter, or
    /// the last commit. Cleared when the text changes.
    pending: Option<&'a str>,
    blur_deadline: Option<u64>,
    last_commit: Option<&'a str>,
}

impl<'a, R: Router> SearchSession<'a, R> {
    pub fn new(index: &'a CityIndex, router: R) -> Self {
        Self::with_config(index, router, SessionConfig::default())
    }

    pub fn with_config(index: &'a CityIndex, router: R, config: SessionConfig) -> Self {
        Self {
            index,
            router,
            config,
            query: String::new(),
            candidates: Vec::new(),
            cursor: -1,
            state: SessionState::Idle,
            pending: None,
            blur_deadline: None,
            last_commit: None,
        }
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// The input text changed.
    pub fn input(&mut self, text: &str) -> SessionState {
        if self.query != text {
            self.query.clear();
            self.query.push_str(text);
            self.pending = None;
        }
        self.blur_deadline = None;

        if text.trim().is_empty() || self.is_exact(text) {
            // nothing typed, or the text already names a location: no dropdown
            self.close();
        } else {
            let found = self.index.search(text, self.config.limit);
            self.open(found);
        }
        self.state
    }

    /// The field gained focus. An empty field is seeded with popular cities.
    pub fn focus(&mut self) -> SessionState {
        self.blur_deadline = None;
        if self.query.trim().is_empty() {
            let popular = self.index.popular_cities(self.config.limit);
            self.open(popular);
        } else if !self.is_exact(&self.query) {
            let found = self.index.search(&self.query, self.config.limit);
            self.open(found);
        }
        self.state
    }

    /// The field lost focus at `now_ms`. The list closes after the configured
    /// delay (see [`Self::tick`]) so a click on a suggestion can land first.
    pub fn blur(&mut self, now_ms: u64) -> SessionState {
        self.blur_deadline = Some(now_ms.saturating_add(self.config.blur_delay_ms));
        self.state
    }

    /// Advance the clock; applies a due blur.
    pub fn tick(&mut self, now_ms: u64) -> SessionState {
        if self.blur_deadline.is_some_and(|deadline| now_ms >= deadline) {
            self.blur_deadline = None;
            self.close();
        }
        self.state
    }

    pub fn key(&mut self, key: Key) -> SessionState {
        match key {
            Key::ArrowDown => {
                if self.state == SessionState::Suggesting {
                    let last = self.candidates.len() as isize - 1;
                    self.cursor = (self.cursor + 1).min(last);
                }
                self.state
            }
            Key::ArrowUp => {
                if self.state == SessionState::Suggesting {
                    self.cursor = (self.cursor - 1).max(-1);
                }
                self.state
            }
            Key::Enter => self.enter(),
            Key::Escape => {
                self.close();
                self.state
            }
            Key::Other => self.state,
        }
    }

    /// A suggestion was clicked. Commits immediately, overriding a pending blur.
    pub fn click(&mut self, position: usize) -> SessionState {
        match self.candidates.get(position).copied() {
            Some(city) => {
                self.blur_deadline = None;
                self.commit(city)
            }
            None => self.state,
        }
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Canonical names currently offered, in order.
    pub fn candidates(&self) -> &[&'a str] {
        &self.candidates
    }

    /// Candidates in their display form, for rendering.
    pub fn display_candidates(&self) -> Vec<&'a str> {
        let index = self.index;
        self.candidates
            .iter()
            .map(|c| index.normalize_for_display(c))
            .collect()
    }

    /// Highlighted position, or -1.
    pub fn cursor(&self) -> isize {
        self.cursor
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Suggesting
    }

    /// Text was typed, it names nothing exactly, and nothing matched:
    /// the UI shows "No results".
    pub fn no_results(&self) -> bool {
        !self.query.trim().is_empty() && self.candidates.is_empty() && !self.is_exact(&self.query)
    }

    /// City an Enter on the closed list commits: the first-Enter pick or
    /// the last commit, as long as the text is unchanged.
    pub fn pending(&self) -> Option<&'a str> {
        self.pending
    }

    pub fn last_commit(&self) -> Option<&'a str> {
        self.last_commit
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn into_router(self) -> R {
        self.router
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn enter(&mut self) -> SessionState {
        if self.state == SessionState::Suggesting && !self.candidates.is_empty() {
            if let Some(city) = self.selected() {
                return self.commit(city);
            }
            // first Enter: take the top candidate into the input, wait for confirmation
            let city = self.candidates[0];
            self.query = self.index.normalize_for_display(city).to_string();
            self.close();
            self.pending = Some(city);
            trace!(city, "awaiting confirmation");
            return self.state;
        }

        if let Some(city) = self.pending {
            return self.commit(city);
        }
        match self.index.resolve(&self.query) {
            Some(city) => self.commit(city),
            None => self.state,
        }
    }

    fn selected(&self) -> Option<&'a str> {
        usize::try_from(self.cursor)
            .ok()
            .and_then(|i| self.candidates.get(i).copied())
    }

    fn commit(&mut self, city: &'a str) -> SessionState {
        self.query = self.index.normalize_for_display(city).to_string();
        self.candidates.clear();
        self.cursor = -1;
        self.pending = Some(city);
        self.state = SessionState::Committed;
        trace!(city, "committed");

        self.router.navigate(city);
        self.last_commit = Some(city);
        self.state = SessionState::Idle;
        SessionState::Committed
    }

    fn open(&mut self, candidates: Vec<&'a str>) {
        self.candidates = candidates;
        self.cursor = -1;
        self.state = if self.candidates.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Suggesting
        };
        trace!(state = self.state.as_str(), candidates = self.candidates.len(), "open");
    }

    fn close(&mut self) {
        self.candidates.clear();
        self.cursor = -1;
        self.state = SessionState::Idle;
    }

    fn is_exact(&self, text: &str) -> bool {
        if self.config.alias_aware_exact {
            self.index.is_exact_match_with_aliases(text)
        } else {
            self.index.is_exact_match(text)
        }
    }
}
