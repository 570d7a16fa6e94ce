//! `wt dump` invocation and line protocol parsing.
//!
//! `wt dump -x` prints a header preamble, a line consisting solely of
//! `Data`, then alternating key/value lines (hex text) until a blank line.
//! [`process_dump`] walks that stream and feeds each record to a
//! [`RecordSink`]; [`dump_table`] wires it to a spawned `wt` process.

use std::io::{BufRead, BufReader};
use std::process::{Child, Command, Stdio};

use crate::wt::config::Config;
use crate::wt::timestamp::Timestamp;
use crate::WtError;

/// Reserved table holding one metadata document per collection.
pub const CATALOG_IDENT: &str = "_mdb_catalog";

/// Per-record hooks invoked by [`process_dump`].
///
/// For every record the parser calls `on_key`, then `on_value`, then
/// `on_record`, exactly once each and in stream order. All three default to
/// no-ops so implementations override only what they need.
pub trait RecordSink {
    fn on_key(&mut self, _key: &str) -> Result<(), WtError> {
        Ok(())
    }

    fn on_value(&mut self, _value: &str) -> Result<(), WtError> {
        Ok(())
    }

    fn on_record(&mut self, _key: &str, _value: &str) -> Result<(), WtError> {
        Ok(())
    }
}

/// Build the `wt` command line for dumping one table.
///
/// Always runs in recovery mode with the MongoDB journal configuration; adds
/// `-t <raw>` when a read timestamp is pinned.
pub fn dump_command(config: &Config, ident: &str, timestamp: Option<Timestamp>) -> Command {
    let mut cmd = Command::new(&config.wt_path);
    cmd.arg("-r")
        .arg("-C")
        .arg("log=(compressor=snappy,path=journal)")
        .arg("-h")
        .arg(&config.home)
        .arg("dump")
        .arg("-x");

    if let Some(ts) = timestamp {
        cmd.arg("-t").arg(ts.raw().to_string());
    }

    cmd.arg(format!("table:{}", ident));
    cmd
}

/// Spawn the dump process with piped stdout.
pub fn spawn_dump(
    config: &Config,
    ident: &str,
    timestamp: Option<Timestamp>,
) -> Result<Child, WtError> {
    dump_command(config, ident, timestamp)
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|e| {
            WtError::Io(format!(
                "Cannot run {}: {}",
                config.wt_path.display(),
                e
            ))
        })
}

/// Parse a dump stream, feeding every record to `sink`.
///
/// Returns the number of records seen. Reaching end-of-stream (or a blank
/// line) before the `Data` marker is a [`WtError::Protocol`] — the
/// collaborator broke its contract and there is nothing to salvage. A key
/// line with no following value line is likewise a protocol error rather
/// than a silently dropped record.
pub fn process_dump(reader: impl BufRead, sink: &mut dyn RecordSink) -> Result<usize, WtError> {
    let mut lines = reader.lines();

    loop {
        let line = match lines.next() {
            None => return Err(WtError::Protocol("no data section".to_string())),
            Some(Err(e)) => return Err(WtError::Io(e.to_string())),
            Some(Ok(line)) => line,
        };
        let line = line.trim();
        if line.is_empty() {
            return Err(WtError::Protocol("no data section".to_string()));
        }
        if line == "Data" {
            break;
        }
    }

    let mut count = 0usize;
    loop {
        let key = match lines.next() {
            None => break, // clean end of section
            Some(Err(e)) => return Err(WtError::Io(e.to_string())),
            Some(Ok(line)) => line.trim().to_string(),
        };
        if key.is_empty() {
            break;
        }

        let value = match lines.next() {
            None => {
                return Err(WtError::Protocol(format!(
                    "truncated dump: key '{}' has no value line",
                    key
                )))
            }
            Some(Err(e)) => return Err(WtError::Io(e.to_string())),
            Some(Ok(line)) => line.trim().to_string(),
        };

        sink.on_key(&key)?;
        sink.on_value(&value)?;
        sink.on_record(&key, &value)?;
        count += 1;
    }

    Ok(count)
}

/// Dump one table end to end: spawn `wt`, parse its stdout, wait for exit.
pub fn dump_table(
    config: &Config,
    ident: &str,
    timestamp: Option<Timestamp>,
    sink: &mut dyn RecordSink,
) -> Result<usize, WtError> {
    let mut child = spawn_dump(config, ident, timestamp)?;
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| WtError::Io("dump process has no stdout".to_string()))?;

    let result = process_dump(BufReader::new(stdout), sink);

    // Reap the child even when parsing failed.
    let _ = child.wait();

    result
}
