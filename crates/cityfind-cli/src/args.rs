use clap::{Parser, Subcommand};

/// CLI arguments for cityfind
#[derive(Debug, Parser)]
#[command(
    name = "cityfind",
    version,
    about = "Resolve free-text city input against the cityfind catalog"
)]
pub struct CliArgs {
    /// Path to a dataset file (.json or .json.gz); the embedded dataset is used by default
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Matcher settings as JSON (`max_fuzzy_distance`, `search_limit`, ...); missing keys keep their defaults
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Transliterate comparison keys to ASCII (dusseldorf finds Düsseldorf)
    #[arg(long = "fold-accents", global = true)]
    pub fold_accents: bool,

    /// Increase log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ranked candidates for a query
    Search {
        query: String,

        /// Result cap [default: the index's search limit]
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Show the matching tier (and edit distance) of every candidate
        #[arg(long)]
        explain: bool,
    },

    /// Whether the query names a catalog city exactly
    Exact {
        query: String,

        /// Also accept an exact alias hit
        #[arg(long)]
        aliases: bool,
    },

    /// The curated popular-cities list
    Popular {
        /// List length [default: the index's suggest limit]
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Display form of a catalog name (disambiguation suffix removed)
    Display { city: String },

    /// Edit distance between two normalized strings
    Distance { a: String, b: String },

    /// Show a summary of the dataset
    Stats,

    /// Drive an autocomplete session from stdin
    Repl,
}
