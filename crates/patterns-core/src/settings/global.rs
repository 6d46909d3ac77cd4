//! The process-wide settings store (Singleton pattern).
//!
//! # How the singleton is created (for beginners)
//!
//! The classic singleton recipe is *double-checked locking*: check whether the
//! instance exists without a lock, and if not, take a lock, check again, and
//! only then construct it.  Written by hand this is easy to get wrong, because
//! a thread can observe the pointer before the object behind it is fully
//! written.
//!
//! Rust's [`std::sync::OnceLock`] implements the same idea correctly:
//!
//! - **Fast path** – once initialised, `get_or_init` is a single atomic load.
//!   No lock is taken, so readers never block each other.
//! - **Slow path** – the first callers race to run the init closure.  Exactly
//!   one wins; the others block until it finishes and then see its result.
//!
//! The lifecycle has two states and one transition:
//!
//! ```text
//! Uninitialized ──first instance()──► Initialized   (terminal)
//! ```
//!
//! There is no teardown.  The store lives in a `static` until the process
//! exits.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use tracing::debug;

use crate::settings::store::SettingsStore;

static INSTANCE: OnceLock<SettingsStore> = OnceLock::new();

/// Number of times the init closure has run.  Must never exceed 1.
static INITIALIZATIONS: AtomicUsize = AtomicUsize::new(0);

/// Entry point to the global [`SettingsStore`].
///
/// `ConfigurationManager` carries no data of its own; it only namespaces the
/// accessors for the single shared store.
///
/// # Examples
///
/// ```rust
/// use patterns_core::ConfigurationManager;
///
/// let config = ConfigurationManager::instance();
/// config.set("username", "user1");
///
/// // Any later call, from any thread, returns the same store.
/// assert!(std::ptr::eq(config, ConfigurationManager::instance()));
/// assert_eq!(ConfigurationManager::instance().get("username").unwrap(), "user1");
/// ```
pub struct ConfigurationManager;

impl ConfigurationManager {
    /// Returns the process-wide store, creating an empty one on first call.
    ///
    /// Safe to call concurrently from any number of threads.  Only callers that
    /// arrive during the very first construction can block, and construction
    /// performs no I/O.
    pub fn instance() -> &'static SettingsStore {
        INSTANCE.get_or_init(|| {
            INITIALIZATIONS.fetch_add(1, Ordering::Relaxed);
            debug!("creating global settings store");
            SettingsStore::new()
        })
    }

    /// Returns `true` once the global store has been created.
    pub fn is_initialized() -> bool {
        INSTANCE.get().is_some()
    }

    /// How many times the global store has been constructed: 0 before the
    /// first [`ConfigurationManager::instance`] call, 1 forever after.
    pub fn initialization_count() -> usize {
        INITIALIZATIONS.load(Ordering::Relaxed)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
//
// All tests in this binary share the same static, so none of them can assume
// the store is uninitialised or empty.  Each uses its own key names.
