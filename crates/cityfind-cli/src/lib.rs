//! cityfind-cli
//! ============
//!
//! Command-line interface for the `cityfind-core` city resolution engine.
//!
//! This crate primarily provides a binary (`cityfind`); the library target
//! only carries this overview.
//!
//! Basic usage:
//!
//! ```text
//! cityfind search pheonix --explain
//! cityfind exact москва --aliases
//! cityfind popular -n 5
//! cityfind repl
//! ```
//!
//! For programmatic access use [`cityfind-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
