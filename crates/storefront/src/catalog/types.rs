//! Wire types for the catalog service API.
//!
//! These mirror the JSON shape the catalog service returns. Monetary
//! amounts are decimal strings (never floats) so precision survives the
//! wire; conversion into domain types happens in `conversions`.

use serde::Deserialize;

/// One coffee as delivered by `GET /coffees`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoffeeData {
    /// Catalog identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Category tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Unit price as a decimal string (e.g., `"6.90"`).
    pub price: String,
    /// Image path.
    pub image: String,
    /// Initial selected quantity. The catalog service always sends 0.
    #[serde(default)]
    pub quantity: u32,
    /// Initial favorite flag. The catalog service always sends false.
    #[serde(default)]
    pub favorite: bool,
}
