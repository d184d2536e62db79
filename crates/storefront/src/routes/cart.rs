//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself is stored in the session, so it lives exactly as long
//! as the visitor's session does.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use coffee_delivery_core::{Cart, CartLine, CoffeeId, PaymentMethod};

use crate::error::AppError;
use crate::filters;
use crate::models::session_keys;
use crate::routes::home::{get_selections, save_selections};
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub quantity: u32,
    pub unit_price: String,
    pub subtotal: String,
    pub image: String,
}

/// Payment option display data for templates.
#[derive(Clone)]
pub struct PaymentOptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Cart totals display data for templates.
///
/// `items_total` is already surcharged by the selected payment method; the
/// grand total adds the delivery fee on top.
#[derive(Clone)]
pub struct CartTotalsView {
    pub items_total: String,
    pub delivery_fee: String,
    pub grand_total: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub totals: CartTotalsView,
    pub payment_options: Vec<PaymentOptionView>,
    pub item_count: u32,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.to_string(),
            title: line.title.clone(),
            tags: line.tags.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price.display(),
            subtotal: line.subtotal().display(),
            image: line.image.clone(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            totals: CartTotalsView {
                items_total: cart.surcharged_item_total().display(),
                delivery_fee: cart.delivery_fee().display(),
                grand_total: cart.grand_total().display(),
            },
            payment_options: PaymentMethod::ALL
                .iter()
                .map(|method| PaymentOptionView {
                    value: method.as_str().to_string(),
                    label: method.label().to_string(),
                    selected: *method == cart.payment_method(),
                })
                .collect(),
            item_count: cart.total_quantity(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart from the session, empty if none stored yet.
async fn get_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(session_keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Store the cart in the session.
async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CART, cart).await
}

// =============================================================================
// Forms & Templates
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub coffee_id: String,
    pub quantity: Option<u32>,
}

/// Cart line action form data.
#[derive(Debug, Deserialize)]
pub struct CartLineForm {
    pub coffee_id: String,
}

/// Payment method form data.
#[derive(Debug, Deserialize)]
pub struct PaymentMethodForm {
    pub method: PaymentMethod,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart totals fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_totals.html")]
pub struct CartTotalsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> CartShowTemplate {
    let cart = get_cart(&session).await;
    CartShowTemplate {
        cart: CartView::from(&cart),
    }
}

/// Add a coffee to the cart (HTMX).
///
/// The quantity selected on the catalog card moves into the cart line and
/// the card selection resets; adding a coffee already in the cart merges
/// quantities. Returns the count badge with an HTMX trigger so the rest of
/// the page can refresh.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<impl IntoResponse, AppError> {
    let id = CoffeeId::new(form.coffee_id);
    let coffee = state.catalog().get_coffee(&id).await?;

    let mut selections = get_selections(&session).await;
    let selected_quantity = selections
        .get(&id)
        .map_or(0, |selection| selection.quantity);
    let quantity = form
        .quantity
        .unwrap_or(if selected_quantity > 0 {
            selected_quantity
        } else {
            1
        });

    let mut cart = get_cart(&session).await;
    cart.add_line(CartLine {
        id: coffee.id,
        title: coffee.title,
        description: coffee.description,
        tags: coffee.tags,
        unit_price: coffee.price,
        image: coffee.image,
        quantity,
    });
    save_cart(&session, &cart).await?;

    // The selection moved into the cart; reset the card counter.
    if let Some(selection) = selections.get_mut(&id) {
        selection.quantity = 0;
        save_selections(&session, &selections).await?;
    }

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.total_quantity(),
        },
    ))
}

/// Increment a cart line's quantity (HTMX).
#[instrument(skip(session))]
pub async fn increment(
    session: Session,
    Form(form): Form<CartLineForm>,
) -> Result<impl IntoResponse, AppError> {
    let id = CoffeeId::new(form.coffee_id);
    let mut cart = get_cart(&session).await;
    if !cart.increment(&id) {
        tracing::warn!("Increment for coffee {id} not in cart");
    }
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    ))
}

/// Decrement a cart line's quantity, flooring at 1 (HTMX).
#[instrument(skip(session))]
pub async fn decrement(
    session: Session,
    Form(form): Form<CartLineForm>,
) -> Result<impl IntoResponse, AppError> {
    let id = CoffeeId::new(form.coffee_id);
    let mut cart = get_cart(&session).await;
    if !cart.decrement(&id) {
        tracing::warn!("Decrement for coffee {id} not in cart");
    }
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    ))
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Form(form): Form<CartLineForm>,
) -> Result<impl IntoResponse, AppError> {
    let id = CoffeeId::new(form.coffee_id);
    let mut cart = get_cart(&session).await;
    if !cart.remove(&id) {
        tracing::warn!("Remove for coffee {id} not in cart");
    }
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    ))
}

/// Select the cart-wide payment method (HTMX).
#[instrument(skip(session))]
pub async fn payment_method(
    session: Session,
    Form(form): Form<PaymentMethodForm>,
) -> Result<CartTotalsTemplate, AppError> {
    let mut cart = get_cart(&session).await;
    cart.set_payment_method(form.method);
    save_cart(&session, &cart).await?;

    Ok(CartTotalsTemplate {
        cart: CartView::from(&cart),
    })
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> CartCountTemplate {
    CartCountTemplate {
        count: get_cart(&session).await.total_quantity(),
    }
}
