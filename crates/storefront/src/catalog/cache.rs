//! Cache types for catalog service responses.

use coffee_delivery_core::Coffee;

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    /// The full coffee list, already converted and sorted by title.
    Coffees(Vec<Coffee>),
}
