//! Page rendering tests driven over HTTP against an in-process server.

use reqwest::StatusCode;

use easystore_ai_integration_tests::spawn_app;

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;

    let resp = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");
}

#[tokio::test]
async fn test_dashboard_renders_demo_data() {
    let app = spawn_app().await;

    let resp = app
        .client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");

    // Demo badge and metrics from the fixture snapshot
    assert!(body.contains("Demo data"));
    assert!(body.contains("$437.99"));
    // Recent orders table with formatted totals and dates
    assert!(body.contains("#1001"));
    assert!(body.contains("$129.99"));
    assert!(body.contains("Nov 10"));
    assert!(body.contains("John Doe"));
    // Sales chart is present with three fixture orders
    assert!(body.contains("sales-chart"));
}

#[tokio::test]
async fn test_products_page_lists_fixtures() {
    let app = spawn_app().await;

    let resp = app
        .client
        .get(format!("{}/products", app.address))
        .send()
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");

    assert!(body.contains("Minimalist Leather Backpack"));
    assert!(body.contains("Wireless Noise Cancelling Headphones"));
    assert!(body.contains("Organic Cotton T-Shirt"));
    assert!(body.contains("Enhance with AI"));
    assert!(body.contains("$249.00"));
}

#[tokio::test]
async fn test_settings_page_renders_form() {
    let app = spawn_app().await;

    let resp = app
        .client
        .get(format!("{}/settings", app.address))
        .send()
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");

    assert!(body.contains("Store Connection"));
    assert!(body.contains("name=\"shop_url\""));
    assert!(body.contains("name=\"access_token\""));
    assert!(body.contains("demo data"));
}

#[tokio::test]
async fn test_enhance_unknown_product_is_404() {
    let app = spawn_app().await;

    let resp = app
        .client
        .post(format!("{}/products/999/enhance", app.address))
        .send()
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_refresh_redirects_to_dashboard() {
    let app = spawn_app().await;

    let resp = app
        .client
        .post(format!("{}/refresh", app.address))
        .send()
        .await
        .expect("Failed to reach server");

    assert!(resp.status().is_redirection());
    assert_eq!(
        resp.headers()
            .get("location")
            .and_then(|v| v.to_str().ok()),
        Some("/")
    );
}
