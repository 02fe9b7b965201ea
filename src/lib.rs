//! product-api - product management over a concurrent in-memory store
//!
//! - [`store`]: the record store and its `ProductStore` seam
//! - [`http_server`]: axum routes translating HTTP to store calls
//! - [`cli`]: `serve` and `openapi` commands

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
