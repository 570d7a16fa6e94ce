//! WiredTiger catalog and table exploration toolkit.
//!
//! The `wiredtiger-utils` crate (library name `wtu`) provides Rust types and
//! functions for inspecting a MongoDB data directory through the WiredTiger
//! `wt` dump utility: loading the `_mdb_catalog` metadata table, dumping
//! collection and index tables (optionally at a point in time), and decoding
//! the hex-encoded BSON values the dump emits.
//!
//! The crate does not read WiredTiger files itself. All raw bytes arrive
//! pre-serialized as hexadecimal text on the stdout of an external `wt dump
//! -x` invocation, and index keys are optionally rendered through the
//! external `ksdecode` tool. Nothing here mutates the data files.
//!
//! # CLI Reference
//!
//! Install the `wtx` binary and use its subcommands to work with a stopped
//! `mongod`'s data directory from the command line.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | [`wtx explore`](cli::app::Commands::Explore) | Interactive catalog → collection → index explorer |
//! | [`wtx catalog`](cli::app::Commands::Catalog) | List catalog entries (namespace, ident, indexes) |
//! | [`wtx dump`](cli::app::Commands::Dump) | Dump one table by storage ident, decoding values as BSON |
//! | [`wtx completions`](cli::app::Commands::Completions) | Generate shell completion scripts |
//!
//! All subcommands accept `--color <auto|always|never>` and `--output <file>`.
//!
//! # Library API
//!
//! ## Quick example
//!
//! ```no_run
//! use wtu::wt::catalog::load_catalog;
//! use wtu::wt::config::Config;
//!
//! let config = Config::new("/usr/local/bin/wt", "/var/lib/mongodb");
//! let entries = load_catalog(&config, None).unwrap();
//! for entry in &entries {
//!     println!("{} -> {}", entry.ns, entry.ident);
//! }
//! ```
//!
//! ## Module overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`wt::config`] | Tool paths and data directory, resolved once at startup |
//! | [`wt::timestamp`] | Point-in-time selector, `(seconds, increment)` packed into a u64 |
//! | [`wt::dump`] | `wt dump` invocation and the line protocol parser |
//! | [`wt::catalog`] | `_mdb_catalog` entries: namespaces, idents, index metadata |
//! | [`wt::decode`] | Hex + BSON decoding, pretty printing, `ksdecode` delegation |
//! | [`util::hex`] | Hex string validation and decoding helpers |

pub mod util;
pub mod wt;

#[cfg(feature = "cli")]
pub mod cli;

use thiserror::Error;

/// Errors returned by `wtu` operations.
#[derive(Error, Debug)]
pub enum WtError {
    /// An I/O error occurred (process spawn, pipe read, or file write failure).
    #[error("I/O error: {0}")]
    Io(String),

    /// The dump utility's output violated its line protocol (missing `Data`
    /// section, or a key line with no paired value line).
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// A dump value could not be decoded (invalid hex or malformed BSON).
    #[error("Decode error: {0}")]
    Decode(String),

    /// An invalid argument was supplied (bad timestamp, unknown ident, etc.).
    #[error("Invalid argument: {0}")]
    Argument(String),
}
