//! DeepDoc: lab-report extraction engine.
//!
//! Reads OCR text from scanned lab reports, finds named clinical
//! measurements, and explains each one against gender-aware reference
//! ranges. The engine lives in [`pipeline::extraction`]; [`api`] serves
//! it over HTTP.

pub mod api;
pub mod catalog;
pub mod config;
pub mod models;
pub mod pipeline;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` overrides
/// [`config::default_log_filter`].
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
