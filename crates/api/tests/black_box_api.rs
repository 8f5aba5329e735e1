use katla_api::config::ApiConfig;
use reqwest::StatusCode;
use serde_json::{json, Value};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(config: ApiConfig) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = katla_api::app::build_app(&config)
            .await
            .expect("failed to build app");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn post_json(client: &reqwest::Client, url: String, body: Value) -> reqwest::Response {
    client.post(url).json(&body).send().await.unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn(ApiConfig::default()).await;

    let res = reqwest::get(srv.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn api_responses_carry_request_id() {
    let srv = TestServer::spawn(ApiConfig::default()).await;

    let res = reqwest::get(srv.url("/api/hives")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn invalid_user_header_is_rejected() {
    let srv = TestServer::spawn(ApiConfig::default()).await;

    let res = reqwest::Client::new()
        .get(srv.url("/api/categories"))
        .header("x-user-id", "nobody")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_user");
}

#[tokio::test]
async fn hive_lifecycle_create_soft_delete_purge() {
    let srv = TestServer::spawn(ApiConfig::default()).await;
    let client = reqwest::Client::new();

    let res = post_json(
        &client,
        srv.url("/api/hives"),
        json!({ "code": "H1", "name": "North", "address": "1 Quay St" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let hive: Value = res.json().await.unwrap();
    let hive_id = hive["id"].as_i64().unwrap();
    assert_eq!(hive["is_deleted"], false);

    // Same code again.
    let res = post_json(&client, srv.url("/api/hives"), json!({ "code": "H1" })).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = post_json(
        &client,
        srv.url(&format!("/api/hives/{hive_id}/sections")),
        json!({ "code": "S1", "name": "Cold" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let section: Value = res.json().await.unwrap();
    assert_eq!(section["store_hive_id"].as_i64(), Some(hive_id));

    let res = client
        .get(srv.url("/api/hives"))
        .send()
        .await
        .unwrap();
    let list: Value = res.json().await.unwrap();
    assert_eq!(list["items"][0]["section_count"], 1);

    // Active hives cannot be purged.
    let res = client
        .delete(srv.url(&format!("/api/hives/{hive_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = client
        .put(srv.url(&format!("/api/hives/{hive_id}/status/true")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["is_deleted"], true);

    let res = client
        .delete(srv.url(&format!("/api/hives/{hive_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(srv.url(&format!("/api/hives/{hive_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(srv.url("/api/sections"))
        .send()
        .await
        .unwrap();
    let sections: Value = res.json().await.unwrap();
    assert_eq!(sections["items"], json!([]));
}

#[tokio::test]
async fn category_and_product_flow() {
    let srv = TestServer::spawn(ApiConfig::default()).await;
    let client = reqwest::Client::new();

    let res = post_json(
        &client,
        srv.url("/api/categories"),
        json!({ "code": "TOOLS", "name": "Tools" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let category: Value = res.json().await.unwrap();
    let category_id = category["id"].as_i64().unwrap();

    let res = post_json(
        &client,
        srv.url("/api/products"),
        json!({ "category_id": category_id, "code": "HMR", "name": "Hammer", "price": 1250 }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let product: Value = res.json().await.unwrap();
    let product_id = product["id"].as_i64().unwrap();

    let res = post_json(
        &client,
        srv.url("/api/products"),
        json!({ "category_id": 999, "code": "SAW" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .put(srv.url(&format!("/api/products/{product_id}")))
        .json(&json!({
            "category_id": category_id,
            "code": "HMR2",
            "name": "Claw hammer",
            "price": 1400,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["code"], "HMR2");
    assert_eq!(updated["price"], 1400);

    let res = client
        .get(srv.url(&format!("/api/categories/{category_id}/products")))
        .send()
        .await
        .unwrap();
    let products: Value = res.json().await.unwrap();
    assert_eq!(products["items"].as_array().map(Vec::len), Some(1));

    let res = client
        .get(srv.url("/api/categories?skip=0&take=10"))
        .send()
        .await
        .unwrap();
    let categories: Value = res.json().await.unwrap();
    assert_eq!(categories["items"][0]["product_count"], 1);
}

#[tokio::test]
async fn malformed_ids_and_bodies_are_bad_requests() {
    let srv = TestServer::spawn(ApiConfig::default()).await;
    let client = reqwest::Client::new();

    let res = client
        .get(srv.url("/api/categories/abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = post_json(&client, srv.url("/api/categories"), json!({ "code": "   " })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn demo_seed_populates_stores() {
    let config = ApiConfig {
        seed_demo: true,
        ..ApiConfig::default()
    };
    let srv = TestServer::spawn(config).await;

    let hives: Value = reqwest::get(srv.url("/api/hives")).await.unwrap().json().await.unwrap();
    assert!(!hives["items"].as_array().unwrap().is_empty());

    let categories: Value = reqwest::get(srv.url("/api/categories"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!categories["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_requests_get_json_error_bodies() {
    let srv = TestServer::spawn(ApiConfig::default()).await;
    let client = reqwest::Client::new();

    let res = post_json(&client, srv.url("/api/categories"), json!({ "name": "No code" })).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_request");
    assert!(body["message"].is_string());

    let res = post_json(&client, srv.url("/api/hives"), json!({ "code": "H1" })).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let res = client
        .put(srv.url("/api/hives/1/status/maybe"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_request");

    let res = client
        .get(srv.url("/api/products?take=-1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_request");
}
