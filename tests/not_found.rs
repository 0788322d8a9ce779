mod common;

use serde_json::{Value, json};

use common::{default_config, spawn_app};

fn expected_not_found_body() -> Value {
    json!({
        "error": "Not Found",
        "message": "The requested endpoint does not exist"
    })
}

#[tokio::test]
async fn unknown_path_returns_404_json() {
    let address = spawn_app(default_config()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/nonexistent"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["content-type"], "application/json");

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, expected_not_found_body());
}

#[tokio::test]
async fn method_mismatch_is_treated_as_not_found() {
    let address = spawn_app(default_config()).await;
    let client = reqwest::Client::new();

    for path in ["/", "/health", "/info"] {
        let response = client
            .post(format!("{address}{path}"))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(
            response.status(),
            reqwest::StatusCode::NOT_FOUND,
            "POST {path} should fall through to the not-found handler"
        );

        let body: Value = response.json().await.unwrap();
        assert_eq!(body, expected_not_found_body());
    }
}

#[tokio::test]
async fn nested_unknown_path_returns_404_json() {
    let address = spawn_app(default_config()).await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{address}/api/v1/whatever"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, expected_not_found_body());
}
