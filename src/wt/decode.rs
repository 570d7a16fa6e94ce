//! Hex + BSON decoding, pretty printing, and `ksdecode` delegation.
//!
//! Collection and catalog values are BSON documents serialized as hex text;
//! index keys are WiredTiger keystrings that only the external `ksdecode`
//! tool can interpret, given the index's key pattern and the record-id type
//! derived from the owning collection's catalog metadata.

use std::process::Command;

use bson::{Bson, Document};

use crate::util::hex::decode_hex;
use crate::wt::catalog::CatalogEntry;
use crate::wt::config::Config;
use crate::WtError;

/// Hex-decode then BSON-decode a dump value.
pub fn decode_document(data: &str) -> Result<Document, WtError> {
    let bytes = decode_hex(data)?;
    Document::from_reader(bytes.as_slice())
        .map_err(|e| WtError::Decode(format!("invalid BSON: {}", e)))
}

/// Multi-line pretty print of a document (relaxed extended JSON).
pub fn pretty_document(doc: &Document) -> String {
    let value = Bson::Document(doc.clone()).into_relaxed_extjson();
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| doc.to_string())
}

/// Decode a dump value and render it indented one tab stop, so the body
/// nests under its `Value:` label.
pub fn format_document(data: &str) -> Result<String, WtError> {
    let doc = decode_document(data)?;
    Ok(format!("\n\t{}", pretty_document(&doc).replace('\n', "\n\t")))
}

/// How a document's position reference is encoded inside an index key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordIdType {
    None,
    String,
    Long,
}

impl RecordIdType {
    /// The `_id_` index carries no record id; clustered collections embed a
    /// string id; everything else uses the numeric record number.
    pub fn for_index(index_name: &str, entry: &CatalogEntry) -> RecordIdType {
        if index_name == "_id_" {
            RecordIdType::None
        } else if entry.is_clustered() {
            RecordIdType::String
        } else {
            RecordIdType::Long
        }
    }

    /// The value passed to `ksdecode -r`.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordIdType::None => "none",
            RecordIdType::String => "string",
            RecordIdType::Long => "long",
        }
    }
}

/// Decode one index key through the external `ksdecode` tool.
///
/// Returns `Ok(None)` when no decoder is configured — the feature is
/// unavailable, not an error. `position` selects `md.indexes[position]`,
/// which holds the key pattern for the index being dumped.
pub fn decode_index_key(
    config: &Config,
    entry: &CatalogEntry,
    index_name: &str,
    position: usize,
    key: &str,
    value: &str,
) -> Result<Option<String>, WtError> {
    let Some(ksdecode) = config.ksdecode() else {
        return Ok(None);
    };

    let pattern = entry.key_pattern(position).ok_or_else(|| {
        WtError::Decode(format!(
            "no key pattern for index {} of {}",
            index_name, entry.ns
        ))
    })?;
    let rid_type = RecordIdType::for_index(index_name, entry);

    let output = Command::new(ksdecode)
        .arg("-o")
        .arg("bson")
        .arg("-p")
        .arg(pretty_document(pattern))
        .arg("-t")
        .arg(value)
        .arg("-r")
        .arg(rid_type.as_str())
        .arg(key)
        .output()
        .map_err(|e| WtError::Io(format!("Cannot run {}: {}", ksdecode.display(), e)))?;

    Ok(Some(
        String::from_utf8_lossy(&output.stdout).trim().to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    fn to_hex(doc: &Document) -> String {
        let mut buf = Vec::new();
        doc.to_writer(&mut buf).unwrap();
        hex::encode(buf)
    }

    #[test]
    fn test_decode_document() {
        let doc = doc! { "ns": "db.coll", "n": 5i32 };
        let decoded = decode_document(&to_hex(&doc)).unwrap();
        assert_eq!(decoded, doc);
    }

    #[test]
    fn test_decode_document_rejects_bad_input() {
        assert!(matches!(decode_document("zz"), Err(WtError::Decode(_))));
        // valid hex, not valid BSON
        assert!(matches!(decode_document("00ff"), Err(WtError::Decode(_))));
    }

    #[test]
    fn test_format_document_indents_every_line() {
        let doc = doc! { "a": 1i32, "b": "two" };
        let formatted = format_document(&to_hex(&doc)).unwrap();
        assert!(formatted.starts_with("\n\t"));
        for line in formatted.lines().skip(1) {
            assert!(line.starts_with('\t'), "unindented line: {:?}", line);
        }
        assert!(formatted.contains("\"a\""));
        assert!(formatted.contains("\"two\""));
    }

    #[test]
    fn test_decode_then_format_round_trips() {
        let doc = doc! { "a": 1i32, "nested": { "b": "x" }, "list": [1i32, 2i32] };
        let formatted = format_document(&to_hex(&doc)).unwrap();
        let stripped = formatted.replace("\n\t", "\n");
        let parsed: serde_json::Value = serde_json::from_str(stripped.trim()).unwrap();
        let expected = Bson::Document(doc).into_relaxed_extjson();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_record_id_type_selection() {
        let plain = CatalogEntry::from_document(doc! {
            "ns": "db.coll",
            "ident": "collection-0",
            "md": { "options": {} },
        })
        .unwrap();
        let clustered = CatalogEntry::from_document(doc! {
            "ns": "db.coll",
            "ident": "collection-1",
            "md": { "options": { "clusteredIndex": true } },
        })
        .unwrap();

        // _id_ wins over clustering
        assert_eq!(
            RecordIdType::for_index("_id_", &clustered),
            RecordIdType::None
        );
        assert_eq!(
            RecordIdType::for_index("_id_", &plain),
            RecordIdType::None
        );
        assert_eq!(
            RecordIdType::for_index("a_1", &clustered),
            RecordIdType::String
        );
        assert_eq!(RecordIdType::for_index("a_1", &plain), RecordIdType::Long);
    }

    #[test]
    fn test_decode_index_key_skipped_without_decoder() {
        let config = Config::new("/usr/bin/wt", "/data/db");
        let entry = CatalogEntry::from_document(doc! {
            "ns": "db.coll",
            "ident": "collection-0",
            "md": { "options": {} },
        })
        .unwrap();
        let result = decode_index_key(&config, &entry, "a_1", 0, "abcd", "0102").unwrap();
        assert_eq!(result, None);
    }
}
