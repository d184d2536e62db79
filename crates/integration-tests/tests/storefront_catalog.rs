//! Integration tests for the catalog (home) page and card fragments.

use reqwest::StatusCode;

use coffee_delivery_integration_tests::TestApp;

/// The rendered quantity for one coffee card, extracted from the page body.
fn card_quantity(body: &str, coffee_dom_id: &str) -> Option<String> {
    let card_start = body.find(&format!("id=\"{coffee_dom_id}\""))?;
    let card = body.get(card_start..)?;
    let card_end = card.find("</article>").unwrap_or(card.len());
    let card = card.get(..card_end)?;

    let marker = "class=\"quantity\">";
    let quantity_start = card.find(marker)? + marker.len();
    let rest = card.get(quantity_start..)?;
    let quantity_end = rest.find('<')?;
    Some(rest.get(..quantity_end)?.trim().to_string())
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::spawn().await;
    let client = TestApp::client();

    let resp = client
        .get(format!("{}/health", app.base_url))
        .send()
        .await
        .expect("Failed to get health");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("body"), "ok");
}

#[tokio::test]
async fn test_home_lists_coffees_sorted_by_title() {
    let app = TestApp::spawn().await;
    let client = TestApp::client();

    let resp = client
        .get(&app.base_url)
        .send()
        .await
        .expect("Failed to get home page");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("body");

    // Accent-folded title ordering: Café < Expresso A < Expresso C < Expresso T
    let positions: Vec<usize> = [
        "Café Gelado",
        "Expresso Americano",
        "Expresso Cremoso",
        "Expresso Tradicional",
    ]
    .iter()
    .map(|title| body.find(title).unwrap_or_else(|| panic!("{title} missing")))
    .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "titles are not in catalog order");
}

#[tokio::test]
async fn test_category_filter_keeps_only_matching_tag() {
    let app = TestApp::spawn().await;
    let client = TestApp::client();

    let body = client
        .get(&app.base_url)
        .query(&[("tag", "gelado")])
        .send()
        .await
        .expect("Failed to get filtered page")
        .text()
        .await
        .expect("body");

    assert!(body.contains("Expresso Tradicional"));
    assert!(body.contains("Café Gelado"));
    assert!(!body.contains("Expresso Americano"));
    assert!(!body.contains("Expresso Cremoso"));
}

#[tokio::test]
async fn test_category_filter_resets_instead_of_stacking() {
    let app = TestApp::spawn().await;
    let client = TestApp::client();

    // First filter by "gelado", then by "com leite": the second filter
    // starts from the full list, so a coffee that is only "com leite"
    // shows up again.
    let _ = client
        .get(&app.base_url)
        .query(&[("tag", "gelado")])
        .send()
        .await
        .expect("Failed to get filtered page");

    let body = client
        .get(&app.base_url)
        .query(&[("tag", "com leite")])
        .send()
        .await
        .expect("Failed to get refiltered page")
        .text()
        .await
        .expect("body");

    assert!(body.contains("Expresso Americano"));
    assert!(!body.contains("Café Gelado"));
}

#[tokio::test]
async fn test_card_quantity_increments_and_floors_at_zero() {
    let app = TestApp::spawn().await;
    let client = TestApp::client();

    let increment = || {
        client
            .post(format!("{}/catalog/increment", app.base_url))
            .form(&[("coffee_id", "0")])
            .send()
    };

    let body = increment().await.expect("increment").text().await.expect("body");
    assert!(body.contains("class=\"quantity\">1<"), "got {body}");

    let body = increment().await.expect("increment").text().await.expect("body");
    assert!(body.contains("class=\"quantity\">2<"), "got {body}");

    // Three decrements from 2: floor at zero, never negative.
    for _ in 0..3 {
        let resp = client
            .post(format!("{}/catalog/decrement", app.base_url))
            .form(&[("coffee_id", "0")])
            .send()
            .await
            .expect("decrement");
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let body = client
        .get(&app.base_url)
        .send()
        .await
        .expect("home")
        .text()
        .await
        .expect("body");
    assert_eq!(card_quantity(&body, "coffee-0").as_deref(), Some("0"));
}

#[tokio::test]
async fn test_favorite_toggles() {
    let app = TestApp::spawn().await;
    let client = TestApp::client();

    let toggle = || {
        client
            .post(format!("{}/catalog/favorite", app.base_url))
            .form(&[("coffee_id", "3")])
            .send()
    };

    let body = toggle().await.expect("favorite").text().await.expect("body");
    assert!(body.contains("favorited"));

    let body = toggle().await.expect("favorite").text().await.expect("body");
    assert!(!body.contains("favorited"));
}

#[tokio::test]
async fn test_unknown_coffee_is_not_found() {
    let app = TestApp::spawn().await;
    let client = TestApp::client();

    let resp = client
        .post(format!("{}/catalog/increment", app.base_url))
        .form(&[("coffee_id", "does-not-exist")])
        .send()
        .await
        .expect("increment");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_catalog_outage_degrades_to_error_banner() {
    // Port 9 (discard) refuses connections immediately.
    let app = TestApp::spawn_with_catalog("http://127.0.0.1:9".to_string()).await;
    let client = TestApp::client();

    let resp = client
        .get(&app.base_url)
        .send()
        .await
        .expect("Failed to get home page");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("body");
    assert!(body.contains("Não foi possível carregar o catálogo"));
    assert!(!body.contains("coffee-card"));
}
