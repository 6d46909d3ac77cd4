//! patterns-demo library entry point.
//!
//! Each function runs one pattern demonstration and returns what it produced,
//! so the binary in `main.rs` can print the results and the integration tests
//! in `tests/` can check them.

use std::thread;

use patterns_core::{
    HtmlReportBuilder, Order, Product, Report, ReportDirector, SettingsError, SettingsStore,
    TextReportBuilder,
};
use thiserror::Error;
use tracing::{debug, info};

/// Key written by the singleton demo before the reader threads start.
pub const DEMO_KEY: &str = "username";
/// Value stored under [`DEMO_KEY`].
pub const DEMO_VALUE: &str = "user1";
/// Number of concurrent reader threads in the singleton demo.
pub const READER_THREADS: usize = 2;

/// Error type for the demo scenarios.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A settings lookup or file operation failed.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// A reader thread panicked before returning its result.
    #[error("reader thread {0} panicked")]
    ReaderPanicked(usize),
}

/// Sets [`DEMO_KEY`] on `store`, then reads it back from [`READER_THREADS`]
/// threads at once.
///
/// Returns the value each reader observed, in thread index order.
///
/// # Errors
///
/// Returns [`DemoError::Settings`] if a reader cannot find the key, or
/// [`DemoError::ReaderPanicked`] if a reader thread dies.
pub fn run_singleton_demo(store: &'static SettingsStore) -> Result<Vec<String>, DemoError> {
    store.set(DEMO_KEY, DEMO_VALUE);
    info!(key = DEMO_KEY, value = DEMO_VALUE, "setting stored");

    let handles: Vec<_> = (0..READER_THREADS)
        .map(|index| {
            thread::spawn(move || {
                let value = store.get(DEMO_KEY);
                debug!(reader = index, ?value, "reader finished");
                value
            })
        })
        .collect();

    let mut observed = Vec::with_capacity(READER_THREADS);
    for (index, handle) in handles.into_iter().enumerate() {
        let value = handle
            .join()
            .map_err(|_| DemoError::ReaderPanicked(index))??;
        observed.push(value);
    }
    Ok(observed)
}

/// Builds the standard report once as plain text and once as HTML.
pub fn run_builder_demo() -> (Report, Report) {
    let director = ReportDirector::new();
    let text = director.construct(&mut TextReportBuilder::new());
    let html = director.construct(&mut HtmlReportBuilder::new());
    (text, html)
}

/// Builds an order with two products and returns it together with its clone.
pub fn run_prototype_demo() -> (Order, Order) {
    let laptop = Product::new("Laptop", 1200.0);
    let smartphone = Product::new("Smartphone", 800.0);

    let mut original = Order::new(50.0, 10.0, "Credit Card");
    original.add_product(&laptop);
    original.add_product(&smartphone);

    let cloned = original.clone();
    (original, cloned)
}
