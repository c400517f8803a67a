//! cityfind-wasm — WebAssembly bindings for cityfind-core
//!
//! The browser UI calls the same engine as the CLI. The dataset is embedded
//! in the binary and validated once on module load.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Free functions: `search(query, limit)`, `is_exact_match(query)`,
//!   `popular_cities(limit)`, `normalize_for_display(city)`, `get_stats()`
//! - An `Autocomplete` class driving one input field: feed it DOM events,
//!   render its `candidates`, and it calls back with the committed city
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { search, Autocomplete } from 'cityfind-wasm';
//!
//! await init();
//! console.log(search('pheonix', 10)); // ["Phoenix"]
//!
//! const ac = new Autocomplete((city) => location.assign(`/browse?city=${city}`));
//! input.addEventListener('input', (e) => { ac.input(e.target.value); render(ac); });
//! input.addEventListener('keydown', (e) => { ac.key(e.key); render(ac); });
//! input.addEventListener('focus', () => { ac.focus(); render(ac); });
//! input.addEventListener('blur', () => {
//!   ac.blur(Date.now());
//!   setTimeout(() => { ac.tick(Date.now()); render(ac); }, 200);
//! });
//! ```
//!
//! Notes
//! -----
//! - `null`/`undefined` queries are treated as the empty query.
//! - Errors cross the boundary as `JsValue` strings.
use cityfind_core::{CityIndex, Key, Router, SearchSession, SessionConfig};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing cityfind WASM module...".into());

    match CityIndex::load() {
        Ok(index) => {
            let stats = index.stats();
            web_sys::console::log_1(
                &format!("✓ Loaded {} cities, {} aliases", stats.cities, stats.aliases).into(),
            );
        }
        Err(e) => web_sys::console::error_1(&format!("cityfind: {e}").into()),
    }
}

fn index() -> Result<&'static CityIndex, JsValue> {
    CityIndex::load().map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/* --------------------------------------------------------------------------
   Resolution API
-------------------------------------------------------------------------- */

/// Ordered canonical city names; popular cities for an empty query.
#[wasm_bindgen]
pub fn search(query: Option<String>, limit: usize) -> Result<JsValue, JsValue> {
    let out = index()?.search_opt(query.as_deref(), limit);
    to_js(&out)
}

#[wasm_bindgen]
pub fn is_exact_match(query: Option<String>) -> Result<bool, JsValue> {
    Ok(index()?.is_exact_match(query.as_deref().unwrap_or_default()))
}

#[wasm_bindgen]
pub fn popular_cities(limit: usize) -> Result<JsValue, JsValue> {
    to_js(&index()?.popular_cities(limit))
}

#[wasm_bindgen]
pub fn normalize_for_display(city: &str) -> Result<String, JsValue> {
    Ok(index()?.normalize_for_display(city).to_string())
}

/// `{ cities, aliases, popular, suffixes }`
#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    to_js(&index()?.stats())
}

/* --------------------------------------------------------------------------
   Autocomplete widget controller
-------------------------------------------------------------------------- */

/// Forwards commits to a JS callback `(city: string) => void`.
///
/// The callback runs as a microtask (`Promise.resolve(city).then(callback)`),
/// after the `Autocomplete` method that committed has returned and released
/// its borrow; a synchronous call would fail on any getter used inside it.
struct JsRouter(js_sys::Function);

impl Router for JsRouter {
    fn navigate(&mut self, city: &str) {
        let promise = js_sys::Promise::resolve(&JsValue::from_str(city));
        let scheduled = js_sys::Reflect::get(&promise, &JsValue::from_str("then"))
            .and_then(|then| then.dyn_into::<js_sys::Function>())
            .and_then(|then| then.call1(&promise, &self.0));
        if let Err(e) = scheduled {
            web_sys::console::error_1(&e);
        }
    }
}

#[derive(Serialize)]
struct CandidateView<'a> {
    canonical: &'a str,
    display: &'a str,
}

#[wasm_bindgen]
pub struct Autocomplete {
    session: SearchSession<'static, JsRouter>,
}

#[wasm_bindgen]
impl Autocomplete {
    /// `on_navigate` receives the canonical name of every committed city.
    /// It is called asynchronously (next microtask), so it may read this
    /// object's getters.
    #[wasm_bindgen(constructor)]
    pub fn new(on_navigate: js_sys::Function, limit: Option<usize>) -> Result<Autocomplete, JsValue> {
        let mut config = SessionConfig::default();
        if let Some(limit) = limit {
            config.limit = limit;
        }
        Ok(Self {
            session: SearchSession::with_config(index()?, JsRouter(on_navigate), config),
        })
    }

    /// Returns the resulting state name (`idle`, `suggesting`, `committed`).
    pub fn input(&mut self, text: &str) -> String {
        self.session.input(text).as_str().to_string()
    }

    pub fn focus(&mut self) -> String {
        self.session.focus().as_str().to_string()
    }

    /// `now_ms` as from `Date.now()`; call [`Self::tick`] once the delay elapsed.
    pub fn blur(&mut self, now_ms: f64) -> String {
        self.session.blur(now_ms as u64).as_str().to_string()
    }

    pub fn tick(&mut self, now_ms: f64) -> String {
        self.session.tick(now_ms as u64).as_str().to_string()
    }

    /// `name` is a `KeyboardEvent.key` value; unknown keys are ignored.
    pub fn key(&mut self, name: &str) -> String {
        self.session.key(Key::from_name(name)).as_str().to_string()
    }

    pub fn click(&mut self, index: usize) -> String {
        self.session.click(index).as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn query(&self) -> String {
        self.session.query().to_string()
    }

    /// `[{ canonical, display }, ...]` in ranking order.
    #[wasm_bindgen(getter)]
    pub fn candidates(&self) -> Result<JsValue, JsValue> {
        let views: Vec<_> = self
            .session
            .candidates()
            .iter()
            .zip(self.session.display_candidates())
            .map(|(&canonical, display)| CandidateView { canonical, display })
            .collect();
        to_js(&views)
    }

    /// Highlighted position, or -1.
    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> i32 {
        self.session.cursor() as i32
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.session.state().as_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = noResults)]
    pub fn no_results(&self) -> bool {
        self.session.no_results()
    }
}
