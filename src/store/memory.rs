//! # In-Memory Product Store
//!
//! A single `RwLock` guards both the record map and the id counter, so
//! every operation sees and leaves a consistent pair. Writers (create,
//! update, delete) hold the exclusive lock for their whole
//! read-modify-write; readers (get, list) share it.
//!
//! Records cross the lock boundary by value only. Nothing outside this
//! module can reach the map.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};
use super::product::{Product, ProductDraft, ProductId};
use super::ProductStore;

const FIRST_ID: ProductId = 1;

#[derive(Debug)]
struct Inner {
    products: HashMap<ProductId, Product>,
    next_id: ProductId,
}

/// Process-local product store
#[derive(Debug)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                products: HashMap::new(),
                next_id: FIRST_ID,
            }),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| StoreError::Internal("store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| StoreError::Internal("store lock poisoned".to_string()))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore for InMemoryStore {
    fn create(&self, draft: ProductDraft) -> StoreResult<Product> {
        let mut inner = self.write()?;
        let id = inner.next_id;
        inner.next_id += 1;

        let product = Product::from_draft(id, draft);
        inner.products.insert(id, product.clone());
        tracing::debug!(id, "product stored");
        Ok(product)
    }

    fn get(&self, id: ProductId) -> StoreResult<Product> {
        let inner = self.read()?;
        inner
            .products
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> StoreResult<Vec<Product>> {
        let inner = self.read()?;
        Ok(inner.products.values().cloned().collect())
    }

    fn update(&self, id: ProductId, draft: ProductDraft) -> StoreResult<Product> {
        let mut inner = self.write()?;
        let product = inner
            .products
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        product.replace_with(draft);
        Ok(product.clone())
    }

    fn delete(&self, id: ProductId) -> StoreResult<()> {
        let mut inner = self.write()?;
        match inner.products.remove(&id) {
            Some(_) => {
                tracing::debug!(id, "product removed");
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }
}
