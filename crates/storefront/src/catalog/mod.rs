//! Catalog service API client.
//!
//! # Architecture
//!
//! - The catalog service is the source of truth - NO local sync, direct
//!   API calls over JSON
//! - In-memory caching via `moka` for API responses (TTL from config,
//!   5 minutes by default)
//! - Wire types are converted to `coffee-delivery-core` domain types at
//!   the client boundary; monetary amounts travel as decimal strings to
//!   preserve precision
//!
//! # Example
//!
//! ```rust,ignore
//! use coffee_delivery_storefront::catalog::CatalogClient;
//!
//! let client = CatalogClient::new(&config.catalog);
//!
//! // The full catalog, sorted by title
//! let coffees = client.get_coffees().await?;
//!
//! // A single coffee
//! let coffee = client.get_coffee(&CoffeeId::new("0")).await?;
//! ```

mod cache;
mod client;
mod conversions;
pub mod types;

pub use client::CatalogClient;

use thiserror::Error;

/// Errors that can occur when talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog service answered with a non-success status.
    #[error("catalog service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A coffee arrived with a price that is not a decimal number.
    #[error("invalid price {value:?} for coffee {id}")]
    InvalidPrice { id: String, value: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}
