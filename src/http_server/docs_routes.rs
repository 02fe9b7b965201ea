//! API Documentation Routes
//!
//! Serves an OpenAPI 3 description of the product endpoints at
//! `/swagger/openapi.json`.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// Base path the product routes are nested under
pub const API_BASE_PATH: &str = "/api";

/// Create documentation routes
pub fn docs_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_handler))
}

async fn openapi_handler() -> Json<Value> {
    Json(openapi_document())
}

/// Build the OpenAPI document for the product API
pub fn openapi_document() -> Value {
    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "description": "Product ID",
        "schema": { "type": "integer", "format": "int64" }
    });
    let product_body = json!({
        "required": true,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/ProductInput" } }
        }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Product Management API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Simple product management service."
        },
        "servers": [{ "url": API_BASE_PATH }],
        "paths": {
            "/products": {
                "get": {
                    "tags": ["products"],
                    "summary": "Get all products",
                    "operationId": "listProducts",
                    "responses": {
                        "200": {
                            "description": "All products",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Product" }
                                    }
                                }
                            }
                        },
                        "500": error_response("Store failure")
                    }
                },
                "post": {
                    "tags": ["products"],
                    "summary": "Create new product",
                    "operationId": "createProduct",
                    "requestBody": product_body.clone(),
                    "responses": {
                        "201": product_response("Created product"),
                        "400": error_response("Malformed body or missing field"),
                        "500": error_response("Store failure")
                    }
                }
            },
            "/products/{id}": {
                "get": {
                    "tags": ["products"],
                    "summary": "Get product by ID",
                    "operationId": "getProduct",
                    "parameters": [id_param.clone()],
                    "responses": {
                        "200": product_response("The product"),
                        "400": error_response("Invalid id"),
                        "404": error_response("Product not found"),
                        "500": error_response("Store failure")
                    }
                },
                "put": {
                    "tags": ["products"],
                    "summary": "Update existing product",
                    "operationId": "updateProduct",
                    "parameters": [id_param.clone()],
                    "requestBody": product_body,
                    "responses": {
                        "200": product_response("Updated product"),
                        "400": error_response("Invalid id or body"),
                        "404": error_response("Product not found"),
                        "500": error_response("Store failure")
                    }
                },
                "delete": {
                    "tags": ["products"],
                    "summary": "Delete product",
                    "operationId": "deleteProduct",
                    "parameters": [id_param],
                    "responses": {
                        "204": { "description": "No Content" },
                        "400": error_response("Invalid id"),
                        "404": error_response("Product not found"),
                        "500": error_response("Store failure")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Product": {
                    "type": "object",
                    "required": ["id", "name", "description", "price", "stock"],
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "price": { "type": "number", "format": "double" },
                        "stock": { "type": "integer", "format": "int64" }
                    }
                },
                "ProductInput": {
                    "type": "object",
                    "required": ["name", "price"],
                    "properties": {
                        "name": { "type": "string", "minLength": 1 },
                        "description": { "type": "string" },
                        "price": { "type": "number", "format": "double" },
                        "stock": { "type": "integer", "format": "int64", "default": 0 }
                    }
                },
                "Error": {
                    "type": "object",
                    "required": ["error"],
                    "properties": { "error": { "type": "string" } }
                }
            }
        }
    })
}

fn product_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/Product" } }
        }
    })
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/Error" } }
        }
    })
}
