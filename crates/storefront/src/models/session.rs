//! Session-related types.
//!
//! Everything a visitor accumulates lives in the session: the cart and the
//! catalog selection state (per-coffee quantity and favorite flag). The
//! session store is in-memory, so all of it resets when the process
//! restarts - there is deliberately no persistence layer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use coffee_delivery_core::CoffeeId;

/// Per-coffee selection state on the catalog page.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CoffeeSelection {
    /// Quantity picked on the catalog card. Floor 0.
    pub quantity: u32,
    /// Whether the visitor marked this coffee as a favorite.
    pub favorite: bool,
}

/// Map of catalog selections, keyed by coffee id.
pub type CatalogSelections = HashMap<CoffeeId, CoffeeSelection>;

/// Session keys for visitor data.
pub mod keys {
    /// Key for storing the serialized cart.
    pub const CART: &str = "cart";

    /// Key for storing the catalog selection map.
    pub const CATALOG_SELECTIONS: &str = "catalog_selections";
}
