//! Product request bodies
//!
//! Bodies are decoded in two explicit steps: JSON into `ProductPayload`,
//! where every field is optional, then `validate` into a `ProductDraft`.
//! Any `id` in the body is ignored.

use serde::Deserialize;

use crate::store::ProductDraft;

use super::errors::{ApiError, ApiResult};

/// Product body as sent by clients
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<i64>,
}

impl ProductPayload {
    /// Decode a raw request body
    pub fn decode(body: &[u8]) -> ApiResult<Self> {
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
    }

    /// Check required fields and fill defaults
    pub fn validate(self) -> ApiResult<ProductDraft> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(ApiError::MissingField("name")),
        };
        let price = self.price.ok_or(ApiError::MissingField("price"))?;

        Ok(ProductDraft {
            name,
            description: self.description.unwrap_or_default(),
            price,
            stock: self.stock.unwrap_or(0),
        })
    }
}

/// Decode and validate in one step
pub fn parse_product(body: &[u8]) -> ApiResult<ProductDraft> {
    ProductPayload::decode(body)?.validate()
}
