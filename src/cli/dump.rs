//! One-shot table dump (`wtx dump`) and the record rendering sink shared
//! with the interactive explorer.

use std::io::Write;

use crate::cli::{build_config, parse_timestamp_arg, wprintln};
use crate::wt::catalog::CatalogEntry;
use crate::wt::config::Config;
use crate::wt::decode::{decode_index_key, format_document};
use crate::wt::dump::{dump_table, RecordSink};
use crate::WtError;

pub struct DumpOptions {
    pub wt: String,
    pub home: String,
    pub ident: String,
    pub timestamp: Option<String>,
    pub raw: bool,
}

/// How a record's value line is rendered.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueFormat {
    /// Pass the hex text through untouched (index tables).
    Raw,
    /// Decode as BSON and nest the pretty-printed body under the label.
    Document,
}

/// Index context for the optional per-record `Decoded:` annotation.
pub(crate) struct KeyAnnotation<'a> {
    pub config: &'a Config,
    pub entry: &'a CatalogEntry,
    pub index_name: &'a str,
    pub position: usize,
}

/// Renders each dump record as `Key:`/`Value:` lines on a destination
/// writer, with an optional decoded-key annotation.
///
/// A value that fails to decode in [`ValueFormat::Document`] mode is
/// reported inline on its `Value:` line and the dump continues; one
/// malformed record must not abort the rest of the table.
pub(crate) struct RecordWriter<'a> {
    out: &'a mut dyn Write,
    format: ValueFormat,
    annotation: Option<KeyAnnotation<'a>>,
}

impl<'a> RecordWriter<'a> {
    pub fn new(out: &'a mut dyn Write, format: ValueFormat) -> Self {
        RecordWriter {
            out,
            format,
            annotation: None,
        }
    }

    pub fn with_annotation(mut self, annotation: KeyAnnotation<'a>) -> Self {
        self.annotation = Some(annotation);
        self
    }
}

impl RecordSink for RecordWriter<'_> {
    fn on_key(&mut self, key: &str) -> Result<(), WtError> {
        wprintln!(self.out, "Key:\t{}", key)
    }

    fn on_value(&mut self, value: &str) -> Result<(), WtError> {
        let body = match self.format {
            ValueFormat::Raw => value.to_string(),
            ValueFormat::Document => match format_document(value) {
                Ok(body) => body,
                Err(e) => format!("<undecodable: {}>", e),
            },
        };
        wprintln!(self.out, "Value:\t{}", body)
    }

    fn on_record(&mut self, key: &str, value: &str) -> Result<(), WtError> {
        let Some(ref ann) = self.annotation else {
            return Ok(());
        };
        let decoded = decode_index_key(
            ann.config,
            ann.entry,
            ann.index_name,
            ann.position,
            key,
            value,
        )?;
        if let Some(text) = decoded {
            wprintln!(self.out, "Decoded:\n\t{}", text)?;
        }
        Ok(())
    }
}

pub fn execute(opts: &DumpOptions, writer: &mut dyn Write) -> Result<(), WtError> {
    let config = build_config(&opts.wt, &opts.home, None);
    let timestamp = parse_timestamp_arg(opts.timestamp.as_deref())?;

    let format = if opts.raw {
        ValueFormat::Raw
    } else {
        ValueFormat::Document
    };

    let mut sink = RecordWriter::new(writer, format);
    dump_table(&config, &opts.ident, timestamp, &mut sink)?;
    Ok(())
}
