//! tests/global_errors/413.rs
//! Ensures that bodies over the configured limit are rejected with 413.

#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_413_when_payload_exceeds_limit() {
    let base_url: String = common::spawn_app().await;

    // The test environment caps bodies at 1KB
    let oversized_payload: Vec<u8> = vec![b'X'; 4 * 1024];

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/users", base_url))
        .body(oversized_payload)
        .send()
        .await
        .expect("Failed to send large request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "PAYLOAD_TOO_LARGE");
    assert_eq!(json["code"], 413);
}
