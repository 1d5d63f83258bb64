use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::{CatalogError, ParameterCatalog};
use crate::pipeline::extraction::ExtractionOptions;

/// Application-level constants
pub const APP_NAME: &str = "DeepDoc";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loopback by default; pass `--bind 0.0.0.0:8000` to expose.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// The hosted front-end.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://deepdoc.vercel.app";

/// Request body cap (1 MiB). OCR text of a multi-page report is far below this.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// `RUST_LOG` overrides this.
pub fn default_log_filter() -> &'static str {
    "deepdoc=info"
}

/// Settings for `deepdoc serve`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub allowed_origins: Vec<String>,
    pub max_body_bytes: usize,
    /// JSON catalog replacing the built-in one.
    pub catalog_path: Option<PathBuf>,
    pub extraction: ExtractionOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            catalog_path: None,
            extraction: ExtractionOptions::default(),
        }
    }
}

impl ServerConfig {
    pub fn load_catalog(&self) -> Result<Arc<ParameterCatalog>, CatalogError> {
        load_catalog(self.catalog_path.as_deref())
    }
}

/// Custom catalog from `path`, or the built-in one.
pub fn load_catalog(path: Option<&std::path::Path>) -> Result<Arc<ParameterCatalog>, CatalogError> {
    match path {
        Some(path) => ParameterCatalog::load(path).map(Arc::new),
        None => Ok(ParameterCatalog::builtin()),
    }
}
