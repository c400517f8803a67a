//! cityfind — Command-line interface for cityfind-core
//!
//! Usage examples
//! --------------
//!
//! - Ranked candidates, with the tier that produced each one
//!   $ cityfind search lon --explain
//!
//! - Exact-match check, optionally alias-aware
//!   $ cityfind exact "london uk"
//!   $ cityfind exact Питер --aliases
//!
//! - Interactive autocomplete session: plain lines are typed text,
//!   `:focus`, `:down`, `:up`, `:enter`, `:esc`, `:blur`, `:click N` and
//!   `:quit` are events
//!   $ cityfind repl
//!
//! Data source
//! -----------
//!
//! By default the dataset embedded in `cityfind-core` is used. Use
//! `--input <path>` to load a `.json` (or, with the `compact` feature,
//! `.json.gz`) dataset of the same shape.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use cityfind_core::{levenshtein, CityIndex, Key, MatchConfig, Router, SearchSession};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = match_config(args.config.as_deref(), args.fold_accents)?;
    let index = match &args.input {
        Some(path) => CityIndex::load_from_path(path, config)
            .with_context(|| format!("failed to load dataset {path}"))?,
        None => CityIndex::embedded(config)?,
    };

    match args.command {
        Commands::Search {
            query,
            limit,
            explain,
        } => {
            let limit = limit.unwrap_or(index.config().search_limit);
            if query.trim().is_empty() {
                for city in index.search(&query, limit) {
                    println!("{city}");
                }
            } else {
                let candidates = index.match_candidates(&query, Some(limit));
                if candidates.is_empty() {
                    println!("No results for: {query}");
                }
                for c in candidates.into_iter().take(limit) {
                    let name = index.city_name(c.city);
                    let label = labelled(&index, name);
                    match (explain, c.distance) {
                        (false, _) => println!("{label}"),
                        (true, Some(d)) => println!("{:<16} {label} (distance {d})", c.tier.as_str()),
                        (true, None) => println!("{:<16} {label}", c.tier.as_str()),
                    }
                }
            }
        }

        Commands::Exact { query, aliases } => {
            let exact = if aliases {
                index.is_exact_match_with_aliases(&query)
            } else {
                index.is_exact_match(&query)
            };
            println!("{exact}");
        }

        Commands::Popular { limit } => {
            let limit = limit.unwrap_or(index.config().suggest_limit);
            for city in index.popular_cities(limit) {
                println!("{city}");
            }
        }

        Commands::Display { city } => println!("{}", index.normalize_for_display(&city)),

        Commands::Distance { a, b } => {
            println!("{}", levenshtein(&index.normalize(&a), &index.normalize(&b)));
        }

        Commands::Stats => {
            let stats = index.stats();
            println!("Dataset statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Aliases: {}", stats.aliases);
            println!("  Popular: {}", stats.popular);
            println!("  Suffixes: {}", stats.suffixes);
        }

        Commands::Repl => repl(&index)?,
    }

    Ok(())
}

/// Matcher settings from an optional JSON file; `--fold-accents` switches folding on.
fn match_config(path: Option<&str>, fold_accents: bool) -> anyhow::Result<MatchConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {path}"))?;
            serde_json::from_str::<MatchConfig>(&text)
                .with_context(|| format!("invalid config {path}"))?
        }
        None => MatchConfig::default(),
    };
    config.fold_diacritics |= fold_accents;
    Ok(config)
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Display form, with the canonical name when the two differ.
fn labelled(index: &CityIndex, canonical: &str) -> String {
    let display = index.normalize_for_display(canonical);
    if display == canonical {
        canonical.to_string()
    } else {
        format!("{display}  ({canonical})")
    }
}

fn repl(index: &CityIndex) -> anyhow::Result<()> {
    let started = Instant::now();
    let mut session = SearchSession::new(index, |city: &str| println!("→ {city}"));

    let stdin = io::stdin();
    let mut out = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let now = started.elapsed().as_millis() as u64;
        session.tick(now);

        match line.trim_end() {
            ":quit" | ":q" => break,
            ":focus" => {
                session.focus();
            }
            ":down" => {
                session.key(Key::ArrowDown);
            }
            ":up" => {
                session.key(Key::ArrowUp);
            }
            ":enter" => {
                session.key(Key::Enter);
            }
            ":esc" => {
                session.key(Key::Escape);
            }
            ":blur" => {
                session.blur(now);
            }
            cmd if cmd.starts_with(":click") => match click_position(cmd) {
                Ok(n) => {
                    session.click(n);
                }
                Err(e) => eprintln!("{e}"),
            },
            cmd if cmd.starts_with(':') => eprintln!("unknown event: {cmd}"),
            text => {
                session.input(text);
            }
        }

        render(&session);
        out.flush()?;
    }
    Ok(())
}

fn click_position(cmd: &str) -> anyhow::Result<usize> {
    let Some(arg) = cmd.strip_prefix(":click").map(str::trim) else {
        bail!("usage: :click N");
    };
    arg.parse()
        .with_context(|| format!("usage: :click N (got {arg:?})"))
}

fn render<R: Router>(session: &SearchSession<'_, R>) {
    if session.is_open() {
        for (i, name) in session.display_candidates().iter().enumerate() {
            let mark = if session.cursor() == i as isize { '>' } else { ' ' };
            println!("{mark} {i:>2}  {name}");
        }
    } else if session.no_results() {
        println!("   No results");
    }
    println!("[{}] {}", session.state().as_str(), session.query());
}
