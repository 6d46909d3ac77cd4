//! Thread-safe key-value settings store with flat-file persistence.
//!
//! # Locking (for beginners)
//!
//! The mapping lives behind a [`std::sync::RwLock`].  Any number of threads may
//! hold the *read* lock at the same time (for `get`, `len`, and `save_to_file`),
//! while the *write* lock (for `set` and `load_from_file`) is exclusive.  This
//! turns concurrent access into a well-defined sequence of whole operations:
//! two threads calling `set` on the same key both succeed, and whichever runs
//! second is the value that stays.
//!
//! File I/O is never performed while a lock is held.  `load_from_file` reads
//! and parses the file first, then takes the write lock once to apply every
//! pair.  `save_to_file` renders the text under the read lock, releases it, and
//! only then writes to disk.
//!
//! # Poisoning
//!
//! A `std` lock becomes *poisoned* if a thread panics while holding it.  Every
//! critical section in this module leaves the map in a valid state (a single
//! insert, a clone, or a batch of inserts), so a poisoned lock is recovered
//! with a warning rather than turned into an error.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::settings::format::{parse_pairs, render_pairs};

/// Error type for settings lookups and file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be opened, read, or written.
    #[error("I/O error accessing settings file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested key has never been set or loaded.
    #[error("setting not found: {key}")]
    NotFound { key: String },
}

/// In-memory mapping from setting name to setting value.
///
/// Keys are kept in a [`BTreeMap`] so that saved files list them in ascending
/// lexicographic order.
///
/// Most code uses the process-wide instance from
/// [`crate::settings::global::ConfigurationManager::instance`].  Standalone
/// stores created with [`SettingsStore::new`] are useful in tests and for
/// reading a file without touching global state.
///
/// # Examples
///
/// ```rust
/// use patterns_core::SettingsStore;
///
/// let store = SettingsStore::new();
/// store.set("username", "user1");
/// assert_eq!(store.get("username").unwrap(), "user1");
/// assert!(store.get("missing").is_err());
/// ```
#[derive(Debug, Default)]
pub struct SettingsStore {
    settings: RwLock<BTreeMap<String, String>>,
}

impl SettingsStore {
    /// Creates an empty store.  Performs no I/O.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NotFound`] if `key` is absent.
    pub fn get(&self, key: &str) -> Result<String, SettingsError> {
        self.read_map()
            .get(key)
            .cloned()
            .ok_or_else(|| SettingsError::NotFound {
                key: key.to_string(),
            })
    }

    /// Inserts or overwrites the value for `key`.
    ///
    /// Nothing is validated and nothing is written to disk; call
    /// [`SettingsStore::save_to_file`] to persist.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.write_map().insert(key.into(), value.into());
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.read_map().contains_key(key)
    }

    /// Number of stored settings.
    pub fn len(&self) -> usize {
        self.read_map().len()
    }

    /// Returns `true` if no settings are stored.
    pub fn is_empty(&self) -> bool {
        self.read_map().is_empty()
    }

    /// Reads `path` and applies every `key value` pair it contains.
    ///
    /// Existing keys not mentioned in the file are kept.  Keys that appear in
    /// the file overwrite the stored value; if a key appears several times the
    /// last occurrence wins.  A trailing token with no value is ignored.
    ///
    /// Returns the number of pairs applied.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] if the file cannot be opened or read.  The
    /// store is left unmodified in that case.
    ///
    /// The whole file must be valid UTF-8.  A file that opens but contains
    /// other bytes (e.g. Latin-1 text) fails with [`SettingsError::Io`] whose
    /// source has kind [`std::io::ErrorKind::InvalidData`], and none of its
    /// pairs are applied.
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<usize, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = parse_pairs(&content);
        if let Some(token) = &parsed.dropped_token {
            debug!(path = %path.display(), token = %token, "ignoring trailing unpaired token");
        }

        let applied = parsed.pairs.len();
        {
            let mut map = self.write_map();
            map.extend(parsed.pairs);
        }

        info!(path = %path.display(), pairs = applied, "loaded settings");
        Ok(applied)
    }

    /// Writes every stored pair to `path`, one `key value` line per setting in
    /// ascending key order.
    ///
    /// An existing file is truncated.  Parent directories are not created.
    ///
    /// Returns the number of pairs written.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] if the file cannot be created or written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<usize, SettingsError> {
        let path = path.as_ref();
        let (content, written) = {
            let map = self.read_map();
            let content = render_pairs(map.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            (content, map.len())
        };

        std::fs::write(path, content).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), pairs = written, "saved settings");
        Ok(written)
    }

    fn read_map(&self) -> RwLockReadGuard<'_, BTreeMap<String, String>> {
        self.settings.read().unwrap_or_else(|poisoned| {
            warn!("settings lock poisoned by a panicked thread; recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write_map(&self) -> RwLockWriteGuard<'_, BTreeMap<String, String>> {
        self.settings.write().unwrap_or_else(|poisoned| {
            warn!("settings lock poisoned by a panicked thread; recovering");
            PoisonError::into_inner(poisoned)
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
