// crates/cityfind-core/tests/embedded_dataset.rs
use cityfind_core::{CityIndex, Key, SearchSession, SessionState, Tier};

fn index() -> &'static CityIndex {
    CityIndex::load().expect("embedded dataset is valid")
}

#[test]
fn exact_catalog_name() {
    assert_eq!(index().search("moscow", 10), ["Moscow"]);
    assert_eq!(index().search("  NEW YORK ", 10), ["New York"]);
}

#[test]
fn foreign_alias() {
    let idx = index();
    assert_eq!(idx.search("Москва", 10), ["Moscow"]);
    assert_eq!(idx.search("питер", 10)[0], "Saint Petersburg");
    assert_eq!(idx.search("NYC", 10)[0], "New York");
}

#[test]
fn prefix_covers_suffixed_variants() {
    let out = index().search("lon", 10);
    assert_eq!(&out[..3], ["London", "London UK", "Long Beach"]);
    assert_eq!(out.len(), 10);
}

#[test]
fn typo_is_recovered() {
    let idx = index();
    assert!(idx.search("Pheonix", 10).contains(&"Phoenix"));

    let c = idx.match_candidates("Pheonix", None);
    assert_eq!(idx.city_name(c[0].city), "Phoenix");
    assert_eq!(c[0].tier, Tier::Fuzzy);
    assert_eq!(c[0].distance, Some(2));
}

#[test]
fn suffixed_canonical_name_resolves_to_itself() {
    let idx = index();
    assert_eq!(idx.resolve("London UK"), Some("London UK"));
    assert_eq!(idx.resolve("london"), Some("London"));
    assert_eq!(idx.search("london uk", 10)[..2], ["London UK", "London"]);
    assert_eq!(idx.normalize_for_display("London UK"), "London");

    let mut committed = Vec::new();
    let mut session = SearchSession::new(idx, |c: &str| committed.push(c.to_string()));
    assert_eq!(session.input("London UK"), SessionState::Idle);
    session.key(Key::Enter);
    session.focus();
    session.key(Key::Enter);
    drop(session);
    assert_eq!(committed, ["London UK", "London UK"]);
}

#[test]
fn diacritics_are_not_folded_by_default() {
    let idx = index();
    let c = idx.match_candidates("sao paulo", None);
    assert_eq!(idx.city_name(c[0].city), "São Paulo");
    assert_eq!(c[0].tier, Tier::Fuzzy);
    assert!(idx.is_exact_match("São Paulo"));
}

#[test]
fn stats_match_dataset() {
    let s = index().stats();
    assert_eq!(s.popular, 20);
    assert_eq!(s.suffixes, 6);
    assert!(s.cities > 900);
    assert!(s.aliases > 100);
}

#[test]
fn session_over_embedded_data() {
    let mut committed = Vec::new();
    let mut session = SearchSession::new(index(), |c: &str| committed.push(c.to_string()));

    assert_eq!(session.focus(), SessionState::Suggesting);
    assert_eq!(session.candidates(), index().popular_cities(10).as_slice());

    session.input("lon");
    session.key(Key::ArrowDown);
    session.key(Key::ArrowDown);
    assert_eq!(session.key(Key::Enter), SessionState::Committed);
    assert_eq!(session.query(), "London");
    drop(session);
    assert_eq!(committed, ["London UK"]);
}
