//! One-shot catalog listing (`wtx catalog`).

use std::io::Write;

use serde::Serialize;

use crate::cli::{build_config, parse_timestamp_arg, wprintln};
use crate::wt::catalog::{load_catalog, CatalogEntry};
use crate::WtError;

pub struct CatalogOptions {
    pub wt: String,
    pub home: String,
    pub timestamp: Option<String>,
    pub json: bool,
}

#[derive(Serialize)]
struct EntryReport<'a> {
    ns: &'a str,
    ident: &'a str,
    indexes: Vec<IndexReport<'a>>,
}

#[derive(Serialize)]
struct IndexReport<'a> {
    name: &'a str,
    ident: &'a str,
}

fn report(entries: &[CatalogEntry]) -> Vec<EntryReport<'_>> {
    entries
        .iter()
        .map(|entry| EntryReport {
            ns: &entry.ns,
            ident: &entry.ident,
            indexes: entry
                .index_idents
                .iter()
                .map(|(name, ident)| IndexReport { name, ident })
                .collect(),
        })
        .collect()
}

pub fn execute(opts: &CatalogOptions, writer: &mut dyn Write) -> Result<(), WtError> {
    let config = build_config(&opts.wt, &opts.home, None);
    let timestamp = parse_timestamp_arg(opts.timestamp.as_deref())?;

    let entries = load_catalog(&config, timestamp)?;

    if opts.json {
        let json = serde_json::to_string_pretty(&report(&entries))
            .map_err(|e| WtError::Io(e.to_string()))?;
        wprintln!(writer, "{}", json)?;
        return Ok(());
    }

    for entry in &entries {
        wprintln!(writer, "{}", entry.ns)?;
        wprintln!(writer, "  ident: {}", entry.ident)?;
        for (name, ident) in &entry.index_idents {
            wprintln!(writer, "  index {}: {}", name, ident)?;
        }
    }
    Ok(())
}
