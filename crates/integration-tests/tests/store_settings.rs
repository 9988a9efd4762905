//! Store connection flow tests.
//!
//! Connection attempts point at closed loopback ports, so validation
//! fails deterministically without touching the network.

use reqwest::StatusCode;

use easystore_ai_integration_tests::spawn_app;

/// Reserve a loopback port, then free it so connections are refused.
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn test_settings_rejects_missing_fields() {
    let app = spawn_app().await;

    let resp = app
        .client
        .post(format!("{}/settings", app.address))
        .form(&[("shop_url", ""), ("access_token", "")])
        .send()
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("are required"));
}

#[tokio::test]
async fn test_settings_rejects_unreachable_store() {
    let app = spawn_app().await;

    let resp = app
        .client
        .post(format!("{}/settings", app.address))
        .form(&[
            ("shop_url", closed_port_url().as_str()),
            ("access_token", "test-token"),
        ])
        .send()
        .await
        .expect("Failed to reach server");

    // The form re-renders with an alert; the demo client stays active
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Could not connect to the store"));

    let dashboard = app
        .client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to reach server")
        .text()
        .await
        .expect("Failed to read body");
    assert!(dashboard.contains("Demo data"));
}

#[tokio::test]
async fn test_demo_switch_redirects_to_dashboard() {
    let app = spawn_app().await;

    let resp = app
        .client
        .post(format!("{}/settings/demo", app.address))
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
