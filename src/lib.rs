//! Locosync - keep local translation files in sync with Loco
//!
//! Locosync is a CLI tool and library that pushes the message ids found in
//! local gettext, YAML and JSON translation files to the Loco translation
//! service, and pulls the translated exports back into local files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, console output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Formats, file layout, discovered messages and reconciliation
//! - `error`: Error types shared by every flow
//! - `remote`: Loco API trait and its HTTP client
//! - `sync`: The extract and import flows, with their hooks

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod remote;
pub mod sync;
