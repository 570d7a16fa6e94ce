//! WiredTiger dump protocol parsing and catalog metadata.
//!
//! Everything in this module goes through the external `wt` binary: the
//! [`dump`] submodule spawns `wt ... dump -x table:<ident>` and parses its
//! line protocol, [`catalog`] loads the reserved `_mdb_catalog` table into
//! [`catalog::CatalogEntry`] values, and [`decode`] turns the hex-encoded
//! BSON payloads into readable documents (delegating index keys to the
//! optional `ksdecode` tool).

pub mod catalog;
pub mod config;
pub mod decode;
pub mod dump;
pub mod timestamp;
