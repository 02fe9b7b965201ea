//! Product record types
//!
//! `Product` is the stored entity; `ProductDraft` is everything a caller
//! supplies on create or update. The id only ever comes from the store.

use serde::{Deserialize, Serialize};

/// Store-assigned product identifier
pub type ProductId = i64;

/// A product as held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
}

impl Product {
    /// Build a record from a draft and an assigned id
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            stock: draft.stock,
        }
    }

    /// Overwrite every field except `id`
    pub fn replace_with(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.stock = draft.stock;
    }

    /// The caller-supplied part of this record
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            stock: self.stock,
        }
    }
}

/// Product fields without an id
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
}

impl ProductDraft {
    /// Create a draft with an empty description and zero stock
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            stock: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }
}
