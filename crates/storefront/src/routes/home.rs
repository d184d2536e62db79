//! Catalog (home) page route handlers.
//!
//! The catalog page lists every coffee with category filter links and
//! per-card quantity/favorite controls. Card controls use HTMX fragments;
//! the visitor's selections live in the session and feed `/cart/add`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use coffee_delivery_core::{Coffee, CoffeeId, catalog};

use crate::error::AppError;
use crate::filters;
use crate::models::session::{CatalogSelections, CoffeeSelection, keys as session_keys};
use crate::state::AppState;

/// Category filter tags offered on the catalog page, with display labels.
const CATEGORIES: &[(&str, &str)] = &[
    ("tradicional", "Tradicional"),
    ("gelado", "Gelado"),
    ("com leite", "Com leite"),
];

/// Coffee card display data for templates.
#[derive(Clone)]
pub struct CoffeeCardView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub price: String,
    pub image: String,
    pub quantity: u32,
    pub favorite: bool,
}

impl From<&Coffee> for CoffeeCardView {
    fn from(coffee: &Coffee) -> Self {
        Self {
            id: coffee.id.to_string(),
            title: coffee.title.clone(),
            description: coffee.description.clone(),
            tags: coffee.tags.clone(),
            price: coffee.price.display(),
            image: coffee.image.clone(),
            quantity: coffee.quantity,
            favorite: coffee.favorite,
        }
    }
}

/// Category filter display data for templates.
#[derive(Clone)]
pub struct CategoryView {
    pub label: String,
    pub href: String,
    pub selected: bool,
}

/// Build the category filter row. Selecting a category always filters the
/// full list - filters never stack.
fn categories(selected_tag: Option<&str>) -> Vec<CategoryView> {
    CATEGORIES
        .iter()
        .map(|(tag, label)| CategoryView {
            label: (*label).to_string(),
            href: format!("/?tag={}", tag.replace(' ', "%20")),
            selected: selected_tag == Some(*tag),
        })
        .collect()
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the catalog selection map from the session.
pub(crate) async fn get_selections(session: &Session) -> CatalogSelections {
    session
        .get::<CatalogSelections>(session_keys::CATALOG_SELECTIONS)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Store the catalog selection map in the session.
pub(crate) async fn save_selections(
    session: &Session,
    selections: &CatalogSelections,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(session_keys::CATALOG_SELECTIONS, selections)
        .await
}

/// Overlay the visitor's selection state onto a catalog coffee.
fn apply_selection(coffee: &mut Coffee, selections: &CatalogSelections) {
    if let Some(selection) = selections.get(&coffee.id) {
        coffee.quantity = selection.quantity;
        coffee.favorite = selection.favorite;
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Catalog query parameters.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub tag: Option<String>,
}

/// Coffee card action form data.
#[derive(Debug, Deserialize)]
pub struct CoffeeActionForm {
    pub coffee_id: String,
}

/// Catalog (home) page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub coffees: Vec<CoffeeCardView>,
    pub categories: Vec<CategoryView>,
    pub catalog_error: bool,
}

/// Coffee card fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/coffee_card.html")]
pub struct CoffeeCardTemplate {
    pub coffee: CoffeeCardView,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the catalog page, optionally filtered by category tag.
///
/// A failed catalog fetch degrades to an error banner over an empty list
/// instead of a blank page.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CatalogQuery>,
) -> impl IntoResponse {
    let (mut coffees, catalog_error) = match state.catalog().get_coffees().await {
        Ok(coffees) => (coffees, false),
        Err(e) => {
            tracing::error!("Failed to load catalog: {e}");
            (Vec::new(), true)
        }
    };

    let selections = get_selections(&session).await;
    for coffee in &mut coffees {
        apply_selection(coffee, &selections);
    }

    let visible = match query.tag.as_deref() {
        Some(tag) => catalog::filter_by_tag(&coffees, tag),
        None => coffees,
    };

    HomeTemplate {
        coffees: visible.iter().map(CoffeeCardView::from).collect(),
        categories: categories(query.tag.as_deref()),
        catalog_error,
    }
}

/// What a coffee card action does to the selection state.
enum SelectionUpdate {
    Increment,
    Decrement,
    ToggleFavorite,
}

/// Apply a card action and re-render the card fragment.
async fn update_selection(
    state: &AppState,
    session: &Session,
    id: &CoffeeId,
    update: SelectionUpdate,
) -> Result<CoffeeCardTemplate, AppError> {
    let mut coffee = state.catalog().get_coffee(id).await?;

    let mut selections = get_selections(session).await;
    let selection = selections.entry(id.clone()).or_default();
    coffee.quantity = selection.quantity;
    coffee.favorite = selection.favorite;

    match update {
        SelectionUpdate::Increment => coffee.increment_quantity(),
        SelectionUpdate::Decrement => coffee.decrement_quantity(),
        SelectionUpdate::ToggleFavorite => coffee.toggle_favorite(),
    }

    *selection = CoffeeSelection {
        quantity: coffee.quantity,
        favorite: coffee.favorite,
    };
    save_selections(session, &selections).await?;

    Ok(CoffeeCardTemplate {
        coffee: CoffeeCardView::from(&coffee),
    })
}

/// Bump a coffee's selected quantity (HTMX).
#[instrument(skip(state, session))]
pub async fn increment(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CoffeeActionForm>,
) -> Result<CoffeeCardTemplate, AppError> {
    update_selection(
        &state,
        &session,
        &CoffeeId::new(form.coffee_id),
        SelectionUpdate::Increment,
    )
    .await
}

/// Lower a coffee's selected quantity, flooring at 0 (HTMX).
#[instrument(skip(state, session))]
pub async fn decrement(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CoffeeActionForm>,
) -> Result<CoffeeCardTemplate, AppError> {
    update_selection(
        &state,
        &session,
        &CoffeeId::new(form.coffee_id),
        SelectionUpdate::Decrement,
    )
    .await
}

/// Toggle a coffee's favorite flag (HTMX).
#[instrument(skip(state, session))]
pub async fn favorite(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CoffeeActionForm>,
) -> Result<CoffeeCardTemplate, AppError> {
    update_selection(
        &state,
        &session,
        &CoffeeId::new(form.coffee_id),
        SelectionUpdate::ToggleFavorite,
    )
    .await
}
