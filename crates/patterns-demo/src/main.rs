//! Creational patterns demo entry point.
//!
//! Runs the three demonstrations in order and prints their output:
//!
//! ```text
//! main()
//!  ├─ singleton  – set `username`, read it from two threads
//!  ├─ builder    – text and HTML reports from one director
//!  └─ prototype  – an order and its deep clone
//! ```
//!
//! Log verbosity is controlled with `RUST_LOG` (default `info`).

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use patterns_core::ConfigurationManager;
use patterns_demo::{run_builder_demo, run_prototype_demo, run_singleton_demo, DEMO_KEY};

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // ── Singleton ─────────────────────────────────────────────────────────────
    info!("running singleton demo");
    let observed = run_singleton_demo(ConfigurationManager::instance())
        .context("singleton demo failed")?;
    for value in &observed {
        println!("Setting '{DEMO_KEY}': {value}");
    }

    // ── Builder ───────────────────────────────────────────────────────────────
    info!("running builder demo");
    let (text_report, html_report) = run_builder_demo();
    println!("\nText Report:\n{text_report}");
    println!("\nHTML Report:\n{html_report}");

    // ── Prototype ─────────────────────────────────────────────────────────────
    info!("running prototype demo");
    let (original, cloned) = run_prototype_demo();
    println!("\nOriginal Order:\n{original}");
    println!("\nCloned Order:\n{cloned}");

    info!("demo finished");
    Ok(())
}
