//! `_mdb_catalog` entries: namespaces, idents, index metadata.
//!
//! The catalog table holds one BSON document per collection. The fields this
//! tool cares about are `ns` (namespace), `ident` (storage ident of the data
//! table), `idxIdent` (index name to storage ident, insertion-ordered), and
//! `md` (metadata: `indexes` array with each index's `spec`, plus collection
//! `options`). Everything else is kept verbatim in the raw document so the
//! explorer can print it.

use bson::{Bson, Document};

use crate::wt::config::Config;
use crate::wt::decode::decode_document;
use crate::wt::dump::{dump_table, RecordSink, CATALOG_IDENT};
use crate::wt::timestamp::Timestamp;
use crate::WtError;

/// One catalog document describing a collection and its indexes.
///
/// Immutable after load; a timestamp change replaces the whole list.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Namespace, e.g. `db.coll`.
    pub ns: String,
    /// Storage ident of the collection's data table.
    pub ident: String,
    /// Index name to storage ident, in `idxIdent` insertion order. This is
    /// the enumeration order shown to the operator, and positions here line
    /// up with the `md.indexes` array.
    pub index_idents: Vec<(String, String)>,
    raw: Document,
}

impl CatalogEntry {
    /// Build an entry from a decoded catalog document.
    ///
    /// Returns `None` for documents that do not describe a collection
    /// (the catalog also stores internal bookkeeping records).
    pub fn from_document(doc: Document) -> Option<CatalogEntry> {
        let ns = doc.get_str("ns").ok()?.to_string();
        let ident = doc.get_str("ident").ok()?.to_string();

        let mut index_idents = Vec::new();
        if let Ok(idx) = doc.get_document("idxIdent") {
            for (name, value) in idx {
                if let Bson::String(ident) = value {
                    index_idents.push((name.clone(), ident.clone()));
                }
            }
        }

        Some(CatalogEntry {
            ns,
            ident,
            index_idents,
            raw: doc,
        })
    }

    /// The full catalog document as dumped.
    pub fn raw(&self) -> &Document {
        &self.raw
    }

    /// The `md` metadata subdocument, when present.
    pub fn metadata(&self) -> Option<&Document> {
        self.raw.get_document("md").ok()
    }

    /// `md.indexes[position]`.
    pub fn index_spec(&self, position: usize) -> Option<&Document> {
        match self.metadata()?.get_array("indexes").ok()?.get(position)? {
            Bson::Document(doc) => Some(doc),
            _ => None,
        }
    }

    /// `md.indexes[position].spec.key` — the index key pattern.
    pub fn key_pattern(&self, position: usize) -> Option<&Document> {
        self.index_spec(position)?
            .get_document("spec")
            .ok()?
            .get_document("key")
            .ok()
    }

    /// True when `md.options` marks the collection as clustered.
    pub fn is_clustered(&self) -> bool {
        self.metadata()
            .and_then(|md| md.get_document("options").ok())
            .is_some_and(|opts| opts.contains_key("clusteredIndex"))
    }

    /// Storage ident for a named index.
    pub fn index_ident(&self, name: &str) -> Option<&str> {
        self.index_idents
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, ident)| ident.as_str())
    }
}

struct EntryCollector {
    entries: Vec<CatalogEntry>,
}

impl RecordSink for EntryCollector {
    fn on_value(&mut self, value: &str) -> Result<(), WtError> {
        let doc = decode_document(value)?;
        if let Some(entry) = CatalogEntry::from_document(doc) {
            self.entries.push(entry);
        }
        Ok(())
    }
}

/// Load the catalog by dumping the reserved `_mdb_catalog` table.
///
/// Each value is hex+BSON decoded; dump order is preserved because it is
/// the numeric menu order the operator navigates by.
pub fn load_catalog(
    config: &Config,
    timestamp: Option<Timestamp>,
) -> Result<Vec<CatalogEntry>, WtError> {
    let mut collector = EntryCollector {
        entries: Vec::new(),
    };
    dump_table(config, CATALOG_IDENT, timestamp, &mut collector)?;
    Ok(collector.entries)
}
