//! tests/global_errors/404.rs
//! Ensures that a path no route entry claims returns HTTP 404.

#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = common::spawn_app().await;

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/does-not-exist", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["status"], "NOT_FOUND");
    assert_eq!(json["code"], 404);
    assert_eq!(json["data"]["path"], "/does-not-exist");
    assert_eq!(json["messages"][0], "Cannot GET /does-not-exist");
}
