//! tests/users_api.rs
//! Drives the five users endpoints through the route table over HTTP.

mod common;

use reqwest::{Client, Response, StatusCode};
use serde_json::{json, Value};

async fn body_json(resp: Response) -> Value {
    let body: String = resp.text().await.unwrap();
    serde_json::from_str(&body).unwrap()
}

#[tokio::test]
async fn user_lifecycle_through_every_route() {
    let base_url: String = common::spawn_app().await;
    let client: Client = Client::new();

    // createUser
    let resp: Response = client
        .post(format!("{}/users", base_url))
        .json(&json!({ "name": "Ada", "email": "ada@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = body_json(resp).await;
    assert_eq!(created["status"], "CREATED");
    assert_eq!(created["code"], 201);
    let id: String = created["data"]["id"].as_str().unwrap().to_string();

    // getUser
    let resp: Response = client.get(format!("{}/users/{}", base_url, id)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["data"]["email"], "ada@example.com");

    // updateUser
    let resp: Response = client
        .put(format!("{}/users/{}", base_url, id))
        .json(&json!({ "name": "Ada Lovelace" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = body_json(resp).await;
    assert_eq!(updated["data"]["name"], "Ada Lovelace");
    assert_eq!(updated["data"]["email"], "ada@example.com");

    // getUsers
    let resp: Response = client.get(format!("{}/users", base_url)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Value = body_json(resp).await;
    assert_eq!(listed["data"]["count"], 1);
    assert_eq!(listed["data"]["users"][0]["id"], id.as_str());

    // deleteUser
    let resp: Response = client.delete(format!("{}/users/{}", base_url, id)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp: Response = client.get(format!("{}/users/{}", base_url, id)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let missing: Value = body_json(resp).await;
    assert_eq!(missing["data"]["error"], "user_not_found");
    assert_eq!(missing["messages"][0], "User not found");
}

#[tokio::test]
async fn get_user_binds_path_segment() {
    let base_url: String = common::spawn_app().await;

    let resp: Response = Client::new().get(format!("{}/users/42", base_url)).send().await.unwrap();

    // Reaches getUser, which echoes the literal id it was given
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["data"]["user_id"], "42");
}

#[tokio::test]
async fn trailing_slash_lists_users_instead_of_get_user() {
    let base_url: String = common::spawn_app().await;

    let resp: Response = Client::new().get(format!("{}/users/", base_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["data"]["count"], 0);
}

#[tokio::test]
async fn undeclared_method_falls_through_to_not_found() {
    let base_url: String = common::spawn_app().await;

    let resp: Response = Client::new()
        .patch(format!("{}/users/42", base_url))
        .json(&json!({ "name": "x" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json: Value = body_json(resp).await;
    assert_eq!(json["status"], "NOT_FOUND");
    assert_eq!(json["messages"][0], "Cannot PATCH /users/42");
}

#[tokio::test]
async fn create_rejects_body_that_is_not_a_user() {
    let base_url: String = common::spawn_app().await;

    let resp: Response = Client::new()
        .post(format!("{}/users", base_url))
        .body("not json")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["data"]["error"], "invalid_body");
}

#[tokio::test]
async fn head_is_served_by_get_routes() {
    let base_url: String = common::spawn_app().await;

    let resp: Response = Client::new().head(format!("{}/users", base_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn strict_mode_keeps_trailing_slash_significant() {
    let base_url: String = common::spawn_app_with(users_service::EnvironmentVariables {
        router_strict: true,
        ..common::test_environment()
    })
    .await;

    let resp: Response = Client::new().get(format!("{}/users/", base_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn status_reports_route_table_size() {
    let base_url: String = common::spawn_app().await;

    let resp: Response = Client::new().get(format!("{}/status", base_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = body_json(resp).await;
    assert_eq!(json["data"]["routes"], 5);
    assert_eq!(json["data"]["environment"], "test");
    assert_eq!(json["data"]["users"], 0);
}

#[tokio::test]
async fn status_counts_created_users() {
    let base_url: String = common::spawn_app().await;
    let client: Client = Client::new();

    let resp: Response = client
        .post(format!("{}/users", base_url))
        .json(&json!({ "name": "Ada", "email": "ada@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp: Response = client.get(format!("{}/status", base_url)).send().await.unwrap();
    assert_eq!(body_json(resp).await["data"]["users"], 1);
}

#[tokio::test]
async fn user_id_is_percent_decoded_before_reaching_handler() {
    let base_url: String = common::spawn_app().await;

    let resp: Response = Client::new().get(format!("{}/users/a%20b", base_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["data"]["user_id"], "a b");
}

#[tokio::test]
async fn malformed_user_id_encoding_is_a_bad_request() {
    let base_url: String = common::spawn_app().await;

    let resp: Response = Client::new()
        .get(format!("{}/users/%E0%A4%A", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: Value = body_json(resp).await;
    assert_eq!(json["code"], 400);
    assert_eq!(json["data"]["error"], "invalid_path_param");
    assert_eq!(json["data"]["param"], "userId");
    assert_eq!(json["data"]["value"], "%E0%A4%A");
}
