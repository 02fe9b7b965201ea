//! # Product Store
//!
//! Owns the authoritative set of products and their lifecycle.
//!
//! `ProductStore` is the seam the HTTP layer talks to; `InMemoryStore` is
//! the process-local implementation. Every method hands back owned values,
//! and absence is reported as `StoreError::NotFound` rather than a panic.

pub mod errors;
pub mod memory;
pub mod product;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use product::{Product, ProductDraft, ProductId};

/// CRUD operations over products
pub trait ProductStore: Send + Sync {
    /// Assign the next id and store the product
    fn create(&self, draft: ProductDraft) -> StoreResult<Product>;

    /// Fetch one product
    fn get(&self, id: ProductId) -> StoreResult<Product>;

    /// All current products, in no particular order
    fn list(&self) -> StoreResult<Vec<Product>>;

    /// Replace every field except the id
    fn update(&self, id: ProductId, draft: ProductDraft) -> StoreResult<Product>;

    /// Remove a product; its id is never handed out again
    fn delete(&self, id: ProductId) -> StoreResult<()>;
}
