//! Product HTTP Routes
//!
//! CRUD endpoints over the product store, nested under `/api`:
//!
//! - `GET    /products`      - list all products
//! - `POST   /products`      - create a product
//! - `GET    /products/:id`  - fetch one product
//! - `PUT    /products/:id`  - replace a product
//! - `DELETE /products/:id`  - delete a product
//!
//! Handlers only parse, call the store, and translate the outcome. Store
//! calls are short in-memory operations and run inline on the worker.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::store::{InMemoryStore, Product, ProductId, ProductStore};

use super::errors::{ApiError, ApiResult};
use super::payload::parse_product;

// ==================
// Shared State
// ==================

/// Product state shared across handlers
pub struct ProductState {
    pub store: Arc<dyn ProductStore>,
}

impl ProductState {
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()))
    }

    /// Use a specific store backend
    pub fn with_store(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

impl Default for ProductState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Product Routes
// ==================

/// Create product routes
pub fn product_routes(state: Arc<ProductState>) -> Router {
    Router::new()
        .route("/products", get(list_products_handler).post(create_product_handler))
        .route(
            "/products/:id",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn parse_id(raw: &str) -> ApiResult<ProductId> {
    raw.parse::<ProductId>()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}

// ==================
// Handlers
// ==================

async fn list_products_handler(
    State(state): State<Arc<ProductState>>,
) -> ApiResult<Json<Vec<Product>>> {
    let products = state
        .store
        .list()
        .map_err(|e| ApiError::from_store(e, "unable to list products"))?;
    Ok(Json(products))
}

async fn create_product_handler(
    State(state): State<Arc<ProductState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let draft = parse_product(&body)?;
    let created = state
        .store
        .create(draft)
        .map_err(|e| ApiError::from_store(e, "unable to create product"))?;

    tracing::info!(id = created.id, name = %created.name, "product created");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_product_handler(
    State(state): State<Arc<ProductState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Product>> {
    let id = parse_id(&raw_id)?;
    let product = state
        .store
        .get(id)
        .map_err(|e| ApiError::from_store(e, "server error"))?;
    Ok(Json(product))
}

async fn update_product_handler(
    State(state): State<Arc<ProductState>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Product>> {
    let id = parse_id(&raw_id)?;
    let draft = parse_product(&body)?;
    let updated = state
        .store
        .update(id, draft)
        .map_err(|e| ApiError::from_store(e, "server error"))?;

    tracing::info!(id, "product updated");
    Ok(Json(updated))
}

async fn delete_product_handler(
    State(state): State<Arc<ProductState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    state
        .store
        .delete(id)
        .map_err(|e| ApiError::from_store(e, "server error"))?;

    tracing::info!(id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
