//! # patterns-core
//!
//! Three creational design patterns, each in its own module:
//!
//! - **`settings`** – A process-wide *Singleton* configuration store.  The
//!   global instance is created lazily on first access, and the key-value
//!   mapping it owns can be loaded from and saved to a flat text file.
//!
//! - **`report`** – A *Builder* that assembles a [`Report`] step by step.  A
//!   [`ReportDirector`] drives any [`ReportBuilder`] through the same sequence
//!   of steps, so plain-text and HTML reports are produced by the same code.
//!
//! - **`order`** – A *Prototype*: an [`Order`] holding several [`Product`]s can
//!   be cloned into a fully independent copy.
//!
//! # Which pattern should I read first? (for beginners)
//!
//! Start with `settings`.  It is the only module with real concurrency and
//! I/O concerns: several threads may race to create the singleton, and file
//! operations can fail.  The other two modules are plain data transformations.

pub mod order;
pub mod report;
pub mod settings;

// Re-export the most-used types at the crate root so callers can write
// `patterns_core::SettingsStore` instead of `patterns_core::settings::store::SettingsStore`.
pub use order::{Order, Product};
pub use report::{HtmlReportBuilder, Report, ReportBuilder, ReportDirector, TextReportBuilder};
pub use settings::global::ConfigurationManager;
pub use settings::store::{SettingsError, SettingsStore};
