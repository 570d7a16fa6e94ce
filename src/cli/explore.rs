//! Interactive catalog → collection → index explorer (`wtx explore`).
//!
//! Three nested menu loops over the loaded catalog. Each screen renders a
//! starred header (sized to its longest line, with the pinned timestamp when
//! set), a fixed action menu plus enumerated children, then reads one
//! command token. Quit is signalled by returning [`Outcome::Quit`] up the
//! loop stack rather than exiting the process, so a scripted test session
//! can drive the whole machine and still get control back.

use std::fs::File;
use std::io::{BufRead, Write};

use crate::cli::dump::{KeyAnnotation, RecordWriter, ValueFormat};
use crate::cli::{build_config, parse_timestamp_arg, wprint, wprintln};
use crate::wt::catalog::{load_catalog, CatalogEntry};
use crate::wt::config::Config;
use crate::wt::decode::pretty_document;
use crate::wt::dump::{dump_table, CATALOG_IDENT};
use crate::wt::timestamp::Timestamp;
use crate::WtError;

const PROMPT: &str = "Choose something to do: ";

pub struct ExploreOptions {
    pub wt: String,
    pub home: String,
    pub ksdecode: Option<String>,
    pub timestamp: Option<String>,
}

/// How an inner menu loop ended.
enum Outcome {
    /// Return to the parent level.
    Back,
    /// Terminate the whole session.
    Quit,
}

pub fn execute(
    opts: &ExploreOptions,
    input: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<(), WtError> {
    let config = build_config(&opts.wt, &opts.home, opts.ksdecode.as_deref());
    let timestamp = parse_timestamp_arg(opts.timestamp.as_deref())?;
    run_session(&config, timestamp, input, writer)
}

/// Run a full interactive session against `config`.
///
/// Loads the catalog once up front; only a timestamp change reloads it.
/// Returns `Ok(())` on quit or end of input. Protocol violations from the
/// dump utility propagate out as errors — there is nothing sensible to do
/// with a broken collaborator mid-session.
pub fn run_session(
    config: &Config,
    timestamp: Option<Timestamp>,
    input: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<(), WtError> {
    let entries = load_catalog(config, timestamp)?;
    let mut session = Session {
        config,
        timestamp,
        entries,
        input,
        out: writer,
    };
    session.catalog_loop()
}

struct Session<'a> {
    config: &'a Config,
    timestamp: Option<Timestamp>,
    entries: Vec<CatalogEntry>,
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
}

/// Numeric menu choice, if the token is a number within bounds.
fn parse_choice(token: &str, len: usize) -> Option<usize> {
    token.parse::<usize>().ok().filter(|i| *i < len)
}

impl Session<'_> {
    fn read_command(&mut self, prompt: &str) -> Result<Option<String>, WtError> {
        wprint!(self.out, "{}", prompt)?;
        self.out.flush().map_err(|e| WtError::Io(e.to_string()))?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .map_err(|e| WtError::Io(e.to_string()))?;
        if n == 0 {
            return Ok(None); // end of input, treat as quit
        }
        Ok(Some(line.trim().to_string()))
    }

    fn header(&mut self, titles: &[String]) -> Result<(), WtError> {
        let ts_line = self.timestamp.map(|ts| ts.to_string());
        let width = titles
            .iter()
            .map(|line| line.len())
            .chain(ts_line.iter().map(|line| line.len()))
            .max()
            .unwrap_or(0);

        wprintln!(self.out, "{}", "*".repeat(width))?;
        for line in titles {
            wprintln!(self.out, "{}", line)?;
        }
        if let Some(ts) = ts_line {
            wprintln!(self.out, "{}", ts)?;
        }
        wprintln!(self.out, "{}", "*".repeat(width))
    }

    fn catalog_loop(&mut self) -> Result<(), WtError> {
        loop {
            self.header(&["Catalog".to_string()])?;
            wprintln!(self.out, "(d) dump catalog")?;
            wprintln!(self.out, "(t) timestamp change")?;
            wprintln!(self.out, "(q) quit")?;
            for (i, entry) in self.entries.iter().enumerate() {
                wprintln!(self.out, "({}) {}", i, entry.ns)?;
            }

            let Some(cmd) = self.read_command(PROMPT)? else {
                return Ok(());
            };

            match cmd.as_str() {
                "d" => self.dump_to_sink(CATALOG_IDENT, ValueFormat::Document, None)?,
                "t" => self.change_timestamp()?,
                "q" => return Ok(()),
                other => {
                    if let Some(i) = parse_choice(other, self.entries.len()) {
                        let entry = self.entries[i].clone();
                        if let Outcome::Quit = self.collection_loop(&entry)? {
                            return Ok(());
                        }
                    } else {
                        wprintln!(self.out, "Unrecognized command {}", other)?;
                    }
                }
            }
        }
    }

    fn collection_loop(&mut self, entry: &CatalogEntry) -> Result<Outcome, WtError> {
        loop {
            self.header(&[format!("Collection {}", entry.ns)])?;
            wprintln!(self.out, "(b) back")?;
            wprintln!(self.out, "(c) catalog entry")?;
            wprintln!(self.out, "(d) dump collection")?;
            wprintln!(self.out, "(i) ident")?;
            wprintln!(self.out, "(q) quit")?;
            for (i, (name, _)) in entry.index_idents.iter().enumerate() {
                wprintln!(self.out, "({}) {}", i, name)?;
            }

            let Some(cmd) = self.read_command(PROMPT)? else {
                return Ok(Outcome::Quit);
            };

            match cmd.as_str() {
                "b" => return Ok(Outcome::Back),
                "c" => wprintln!(self.out, "{}", pretty_document(entry.raw()))?,
                "d" => self.dump_to_sink(&entry.ident, ValueFormat::Document, None)?,
                "i" => wprintln!(self.out, "{}", entry.ident)?,
                "q" => return Ok(Outcome::Quit),
                other => {
                    if let Some(i) = parse_choice(other, entry.index_idents.len()) {
                        let name = entry.index_idents[i].0.clone();
                        if let Outcome::Quit = self.index_loop(entry, &name, i)? {
                            return Ok(Outcome::Quit);
                        }
                    } else {
                        wprintln!(self.out, "Unrecognized command {}", other)?;
                    }
                }
            }
        }
    }

    fn index_loop(
        &mut self,
        entry: &CatalogEntry,
        index_name: &str,
        position: usize,
    ) -> Result<Outcome, WtError> {
        loop {
            self.header(&[
                format!("Collection {}", entry.ns),
                format!("Index {}", index_name),
            ])?;
            wprintln!(self.out, "(b) back")?;
            wprintln!(self.out, "(c) catalog entry")?;
            wprintln!(self.out, "(d) dump index")?;
            wprintln!(self.out, "(i) ident")?;
            wprintln!(self.out, "(q) quit")?;

            let Some(cmd) = self.read_command(PROMPT)? else {
                return Ok(Outcome::Quit);
            };

            match cmd.as_str() {
                "b" => return Ok(Outcome::Back),
                "c" => match entry.index_spec(position) {
                    Some(spec) => wprintln!(self.out, "{}", pretty_document(spec))?,
                    None => wprintln!(self.out, "No metadata for index {}", index_name)?,
                },
                "d" => match entry.index_ident(index_name) {
                    Some(ident) => {
                        let ident = ident.to_string();
                        self.dump_to_sink(
                            &ident,
                            ValueFormat::Raw,
                            Some((entry, index_name, position)),
                        )?;
                    }
                    None => wprintln!(self.out, "No ident for index {}", index_name)?,
                },
                "i" => match entry.index_ident(index_name) {
                    Some(ident) => wprintln!(self.out, "{}", ident)?,
                    None => wprintln!(self.out, "No ident for index {}", index_name)?,
                },
                "q" => return Ok(Outcome::Quit),
                other => wprintln!(self.out, "Unrecognized command {}", other)?,
            }
        }
    }

    fn change_timestamp(&mut self) -> Result<(), WtError> {
        let Some(input) =
            self.read_command("Timestamp to read data at (leave empty for latest): ")?
        else {
            return Ok(());
        };

        match Timestamp::parse(&input) {
            Ok(new_ts) => {
                // Only an actual change invalidates the loaded catalog.
                if new_ts != self.timestamp {
                    self.timestamp = new_ts;
                    self.entries = load_catalog(self.config, self.timestamp)?;
                }
            }
            Err(_) => {
                wprintln!(self.out, "Unable to interpret timestamp {}", input)?;
            }
        }
        Ok(())
    }

    /// Realize a dump action: ask for a destination, then stream the table
    /// through a [`RecordWriter`] to that destination.
    fn dump_to_sink(
        &mut self,
        ident: &str,
        format: ValueFormat,
        index: Option<(&CatalogEntry, &str, usize)>,
    ) -> Result<(), WtError> {
        let Some(path) = self.read_command("File to write (leave empty to print): ")? else {
            return Ok(());
        };

        let config = self.config;
        let timestamp = self.timestamp;

        if path.is_empty() {
            let mut sink = RecordWriter::new(&mut *self.out, format);
            if let Some((entry, index_name, position)) = index {
                sink = sink.with_annotation(KeyAnnotation {
                    config,
                    entry,
                    index_name,
                    position,
                });
            }
            dump_table(config, ident, timestamp, &mut sink)?;
        } else {
            let mut file = match File::create(&path) {
                Ok(file) => file,
                Err(e) => {
                    wprintln!(self.out, "Cannot create {}: {}", path, e)?;
                    return Ok(());
                }
            };
            let mut sink = RecordWriter::new(&mut file, format);
            if let Some((entry, index_name, position)) = index {
                sink = sink.with_annotation(KeyAnnotation {
                    config,
                    entry,
                    index_name,
                    position,
                });
            }
            dump_table(config, ident, timestamp, &mut sink)?;
            // file handle closes here, success or not
        }

        Ok(())
    }
}
