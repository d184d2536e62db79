//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Catalog (home) page; ?tag= filters by category
//! GET  /health                 - Health check
//!
//! # Catalog cards (HTMX fragments)
//! POST /catalog/increment      - Bump a coffee's selected quantity
//! POST /catalog/decrement      - Lower it, floor 0
//! POST /catalog/favorite       - Toggle the favorite flag
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add a coffee (returns count badge, triggers cart-updated)
//! POST /cart/increment         - Increment a line (returns cart_items fragment)
//! POST /cart/decrement         - Decrement a line, floor 1 (returns cart_items fragment)
//! POST /cart/remove            - Remove a line (returns cart_items fragment)
//! POST /cart/payment-method    - Select the payment method (returns cart_totals fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//! ```

pub mod cart;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog card routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/increment", post(home::increment))
        .route("/decrement", post(home::decrement))
        .route("/favorite", post(home::favorite))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/increment", post(cart::increment))
        .route("/decrement", post(cart::decrement))
        .route("/remove", post(cart::remove))
        .route("/payment-method", post(cart::payment_method))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog (home) page
        .route("/", get(home::home))
        // Catalog card fragments
        .nest("/catalog", catalog_routes())
        // Cart routes
        .nest("/cart", cart_routes())
}
