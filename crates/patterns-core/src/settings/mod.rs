//! Settings: a string-to-string configuration store with file persistence.
//!
//! # Sub-modules
//!
//! - **`format`** – Pure text codec for the settings file.  No file system
//!   access, so it can be tested with plain strings.
//!
//! - **`store`** – [`store::SettingsStore`], the thread-safe in-memory mapping,
//!   plus load/save against a file path.
//!
//! - **`global`** – [`global::ConfigurationManager`], which owns the single
//!   process-wide `SettingsStore` and creates it on first use.
//!
//! # File format
//!
//! ```text
//! theme dark
//! username user1
//! ```
//!
//! On load the file is read as a stream of whitespace-separated tokens, taken
//! two at a time as `key value`.  Line breaks carry no meaning when reading.
//! On save every pair is written on its own line in ascending key order.

pub mod format;
pub mod global;
pub mod store;
