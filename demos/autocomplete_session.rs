//! Autocomplete session example for cityfind
//!
//! Replays the keystrokes of a user typing into a city field and shows the
//! dropdown after each event, the way a UI widget would render it.

use cityfind::{CityIndex, Key, Result, Router, SearchSession};

fn show<R: Router>(event: &str, session: &SearchSession<'_, R>) {
    println!("{event:<14} [{}] {:?}", session.state().as_str(), session.query());
    for (i, city) in session.display_candidates().iter().enumerate() {
        let mark = if session.cursor() == i as isize { '>' } else { ' ' };
        println!("   {mark} {city}");
    }
}

fn main() -> Result<()> {
    println!("=== cityfind Autocomplete Session Example ===\n");
    let index = CityIndex::load()?;

    // Example 1: focus, type, pick the second suggestion
    println!("--- Example 1: Arrow keys ---");
    let mut session = SearchSession::new(index, |city: &str| println!("   → navigate to {city}"));
    session.focus();
    show("focus", &session);
    session.input("lon");
    show("type 'lon'", &session);
    session.key(Key::ArrowDown);
    session.key(Key::ArrowDown);
    show("down, down", &session);
    session.key(Key::Enter);
    show("enter", &session);
    println!();

    // Example 2: Enter twice without touching the list
    println!("--- Example 2: Two-phase Enter ---");
    let mut session = SearchSession::new(index, |city: &str| println!("   → navigate to {city}"));
    session.input("pheo");
    show("type 'pheo'", &session);
    session.key(Key::Enter);
    show("enter", &session);
    session.key(Key::Enter);
    show("enter", &session);
    println!();

    // Example 3: blur closes after the delay unless a click lands first
    println!("--- Example 3: Blur and click ---");
    let mut session = SearchSession::new(index, |city: &str| println!("   → navigate to {city}"));
    session.input("san");
    session.blur(0);
    session.tick(150);
    show("blur, 150ms", &session);
    session.click(2);
    show("click 2", &session);

    Ok(())
}
