//! CLI subcommand implementations for the `wtx` binary.
//!
//! CLI argument parsing uses clap derive macros, with the top-level
//! [`app::Cli`] struct and [`app::Commands`] enum defined in [`app`] and
//! shared between `main.rs` and `build.rs` (for man page generation) via
//! `include!()`.
//!
//! Each subcommand module follows the same pattern: an `Options` struct
//! holding the parsed arguments and a `pub fn execute(opts, writer) ->
//! Result<(), WtError>` entry point. The `writer: &mut dyn Write` parameter
//! allows output to be captured in tests or redirected to a file via the
//! global `--output` flag. The interactive [`explore`] subcommand
//! additionally takes an `input: &mut dyn BufRead`, so a test can script an
//! entire session as ordered textual input and assert on the ordered output.
//!
//! | Command | Module | Purpose |
//! |---------|--------|---------|
//! | `wtx explore` | [`explore`] | Interactive catalog → collection → index explorer |
//! | `wtx catalog` | [`catalog`] | List catalog entries, optionally as JSON |
//! | `wtx dump` | [`dump`] | One-shot dump of a table by storage ident |
//!
//! The `wprintln!` and `wprint!` macros wrap `writeln!`/`write!` to convert
//! `io::Error` into `WtError`.

pub mod app;
pub mod catalog;
pub mod dump;
pub mod explore;

/// Write a line to the given writer, converting io::Error to WtError.
macro_rules! wprintln {
    ($w:expr) => {
        writeln!($w).map_err(|e| $crate::WtError::Io(e.to_string()))
    };
    ($w:expr, $($arg:tt)*) => {
        writeln!($w, $($arg)*).map_err(|e| $crate::WtError::Io(e.to_string()))
    };
}

/// Write (without newline) to the given writer, converting io::Error to WtError.
macro_rules! wprint {
    ($w:expr, $($arg:tt)*) => {
        write!($w, $($arg)*).map_err(|e| $crate::WtError::Io(e.to_string()))
    };
}

pub(crate) use wprint;
pub(crate) use wprintln;

use crate::wt::config::Config;
use crate::wt::timestamp::Timestamp;
use crate::WtError;

/// Build a [`Config`] from the common subcommand arguments.
pub(crate) fn build_config(wt: &str, home: &str, ksdecode: Option<&str>) -> Config {
    let config = Config::new(wt, home);
    match ksdecode {
        Some(path) => config.with_ksdecode(path),
        None => config,
    }
}

/// Parse the optional `--timestamp` argument.
pub(crate) fn parse_timestamp_arg(arg: Option<&str>) -> Result<Option<Timestamp>, WtError> {
    match arg {
        Some(text) => Timestamp::parse(text),
        None => Ok(None),
    }
}
