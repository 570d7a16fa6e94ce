//! Tool paths and data directory, resolved once at startup.

use std::path::{Path, PathBuf};

/// External tool locations and the data directory to inspect.
///
/// Built from CLI arguments in `main` and passed by reference into every
/// component that spawns a process. `ksdecode_path` is optional: when unset,
/// index-key decoding is reported as unavailable and skipped.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the WiredTiger `wt` binary.
    pub wt_path: PathBuf,
    /// Path to the `ksdecode` keystring decoder, if available.
    pub ksdecode_path: Option<PathBuf>,
    /// MongoDB data directory (the `wt -h` home).
    pub home: PathBuf,
}

impl Config {
    pub fn new(wt_path: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Config {
            wt_path: wt_path.into(),
            ksdecode_path: None,
            home: home.into(),
        }
    }

    pub fn with_ksdecode(mut self, path: impl Into<PathBuf>) -> Self {
        self.ksdecode_path = Some(path.into());
        self
    }

    /// The keystring decoder path, when configured.
    pub fn ksdecode(&self) -> Option<&Path> {
        self.ksdecode_path.as_deref()
    }
}
