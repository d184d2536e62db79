//! Integration tests for Coffee Delivery.
//!
//! The harness boots two in-process servers on ephemeral ports: a fixture
//! catalog service serving a fixed coffee list, and the real storefront
//! router pointed at it. Tests drive the storefront over HTTP with
//! `reqwest`; a cookie store keeps the session alive across requests, the
//! same way a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p coffee-delivery-integration-tests
//! ```

use std::net::SocketAddr;

use axum::{Json, Router, routing::get};

use coffee_delivery_storefront::app;
use coffee_delivery_storefront::config::{CatalogConfig, StorefrontConfig};
use coffee_delivery_storefront::state::AppState;

/// The coffee list served by the fixture catalog service.
///
/// Prices are decimal strings, matching the catalog wire format. The titles
/// are deliberately unsorted so the storefront's title ordering is visible.
pub const FIXTURE_COFFEES: &str = r#"[
  {
    "id": "2",
    "title": "Expresso Cremoso",
    "description": "Café expresso tradicional com espuma cremosa",
    "tags": ["especial"],
    "price": "16.50",
    "image": "/images/coffees/expresso-cremoso.png",
    "quantity": 0,
    "favorite": false
  },
  {
    "id": "0",
    "title": "Expresso Tradicional",
    "description": "O tradicional café feito com água quente e grãos moídos",
    "tags": ["tradicional", "gelado"],
    "price": "6.90",
    "image": "/images/coffees/expresso.png",
    "quantity": 0,
    "favorite": false
  },
  {
    "id": "1",
    "title": "Expresso Americano",
    "description": "Expresso diluído, menos intenso que o tradicional",
    "tags": ["tradicional", "com leite"],
    "price": "9.95",
    "image": "/images/coffees/americano.png",
    "quantity": 0,
    "favorite": false
  },
  {
    "id": "3",
    "title": "Café Gelado",
    "description": "Bebida preparada com café expresso e cubos de gelo",
    "tags": ["gelado"],
    "price": "7.50",
    "image": "/images/coffees/cafe-gelado.png",
    "quantity": 0,
    "favorite": false
  }
]"#;

/// Serve a router on an ephemeral local port, returning its address.
async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server error");
    });

    addr
}

/// Start the fixture catalog service and return its base URL.
pub async fn spawn_catalog_fixture() -> String {
    let coffees: serde_json::Value =
        serde_json::from_str(FIXTURE_COFFEES).expect("Fixture JSON is valid");

    let router = Router::new().route(
        "/coffees",
        get(move || {
            let coffees = coffees.clone();
            async move { Json(coffees) }
        }),
    );

    let addr = serve(router).await;
    format!("http://{addr}")
}

/// A running storefront instance under test.
pub struct TestApp {
    /// Base URL of the storefront server.
    pub base_url: String,
}

impl TestApp {
    /// Boot the storefront against a fresh fixture catalog.
    pub async fn spawn() -> Self {
        let catalog_url = spawn_catalog_fixture().await;
        Self::spawn_with_catalog(catalog_url).await
    }

    /// Boot the storefront against an arbitrary catalog URL.
    ///
    /// Pointing at a dead address exercises the degraded catalog path.
    pub async fn spawn_with_catalog(catalog_url: String) -> Self {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().expect("valid host"),
            port: 0,
            base_url: "http://localhost".to_string(),
            catalog: CatalogConfig {
                base_url: catalog_url,
                api_token: None,
                cache_ttl_secs: 300,
            },
            sentry_dsn: None,
        };

        let state = AppState::new(config);
        let addr = serve(app(state)).await;

        Self {
            base_url: format!("http://{addr}"),
        }
    }

    /// An HTTP client with a cookie store, so the session survives across
    /// requests like it would in a browser.
    #[must_use]
    pub fn client() -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client")
    }
}
