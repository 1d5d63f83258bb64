//! HTTP transport for report analysis.
//!
//! Provides an axum `Router` exposing analysis endpoints under `/api/`,
//! plus the server lifecycle that binds and serves it.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::{build_router, cors_layer};
pub use server::{start_server, ApiServer, ServerError, ServerSession};
pub use types::ApiContext;
