//! # HTTP Server Module
//!
//! Transport layer for the product store.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/products` - Product CRUD
//! - `/swagger/openapi.json` - API description

pub mod config;
pub mod docs_routes;
pub mod errors;
pub mod health_routes;
pub mod payload;
pub mod product_routes;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use product_routes::ProductState;
pub use server::HttpServer;
