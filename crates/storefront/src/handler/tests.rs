use super::AppRouter;
use crate::testing::InMemoryStore;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt;

fn app(store: &InMemoryStore) -> Router {
    AppRouter::build(store.app_state(), Duration::from_secs(5))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn info_returns_success_envelope() {
    let app = app(&InMemoryStore::new());

    let (status, body) = get(&app, "/v1/info").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "result": "success", "message": "success", "code": 200 })
    );
}

#[tokio::test]
async fn product_detail_embeds_categories() {
    let app = app(&InMemoryStore::new());

    let (status, body) = post(&app, "/v1/category/add", json!({ "name": "Electronics" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["id"], 1);
    assert_eq!(body["result"]["parent_id"], Value::Null);

    let (status, body) = post(
        &app,
        "/v1/product/add",
        json!({
            "name": "Phone",
            "sku": "P1",
            "category_id": [1],
            "price": [{ "amount": 10, "price": 500.0 }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["SKU"], "P1");
    let id = body["result"]["id"].as_i64().unwrap();
    assert!(id > 0);

    let (status, body) = get(&app, &format!("/v1/product/detail?id={id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["name"], "Phone");
    assert_eq!(body["result"]["sku"], "P1");
    let categories = body["result"]["category"].as_array().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0]["id"], 1);
    assert_eq!(categories[0]["name"], "Electronics");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request_envelope() {
    let app = app(&InMemoryStore::new());

    let (status, body) = send(
        &app,
        Request::post("/v1/category/add")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["result"], "");
    assert_eq!(body["code"], 400);
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn missing_or_bad_id_is_a_bad_request() {
    let app = app(&InMemoryStore::new());

    let (status, body) = get(&app, "/v1/category/detail").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (status, _) = get(&app, "/v1/product/detail?id=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/v1/product/compare/1/x").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn use_case_errors_collapse_to_400() {
    let app = app(&InMemoryStore::new());

    let (status, body) = get(&app, "/v1/product/detail?id=7").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Not found");

    let (status, body) = post(
        &app,
        "/v1/category/update",
        json!({ "id": 3, "name": "Nothing" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Total affected: 0");
}

#[tokio::test]
async fn compare_never_fails_for_unknown_ids() {
    let store = InMemoryStore::new();
    let app = app(&store);

    post(&app, "/v1/product/add", json!({ "name": "Phone", "sku": "P1" })).await;
    post(&app, "/v1/product/add", json!({ "name": "Tablet", "sku": "T1" })).await;

    let (status, body) = get(&app, "/v1/product/compare/2/1").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body["result"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Tablet", "Phone"]);

    let (status, body) = get(&app, "/v1/product/compare/1/99").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn search_pages_and_counts() {
    let app = app(&InMemoryStore::new());

    for (name, sku) in [("Phone", "P1"), ("Smartphone", "P2"), ("Tablet", "T1")] {
        post(&app, "/v1/product/add", json!({ "name": name, "sku": sku })).await;
    }

    let (status, body) = get(&app, "/v1/product/search?query=PHONE&limit=1&offset=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["found"], 2);
    assert_eq!(body["result"]["data"].as_array().unwrap().len(), 1);

    let (_, body) = get(&app, "/v1/product/search?query=t1&limit=0&offset=0").await;
    assert_eq!(body["result"]["found"], 1);
    assert_eq!(body["result"]["data"][0]["name"], "Tablet");

    let (_, body) = get(&app, "/v1/product/search?limit=0&offset=0").await;
    assert_eq!(body["result"]["found"], 3);

    let (status, _) = get(&app, "/v1/product/search?query=x").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn category_update_keeps_parent_when_omitted() {
    let app = app(&InMemoryStore::new());

    post(&app, "/v1/category/add", json!({ "name": "Root" })).await;
    post(
        &app,
        "/v1/category/add",
        json!({ "name": "Child", "parent_id": 1 }),
    )
    .await;

    let (status, body) = post(
        &app,
        "/v1/category/update",
        json!({ "id": 2, "name": "Renamed" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["name"], "Renamed");
    assert_eq!(body["result"]["parent_id"], 1);

    let (_, body) = post(
        &app,
        "/v1/category/update",
        json!({ "id": 2, "name": "Renamed", "parent_id": null }),
    )
    .await;
    assert_eq!(body["result"]["parent_id"], Value::Null);

    let (_, body) = get(&app, "/v1/category/search?query=ren&limit=10&offset=0").await;
    assert_eq!(body["result"]["found"], 1);
}

#[tokio::test]
async fn order_requires_existing_product() {
    let store = InMemoryStore::new();
    let app = app(&store);

    let (status, body) = post(
        &app,
        "/v1/order/add",
        json!({ "product_id": 1, "amount": 2, "price": 10.0, "status": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Not found");

    post(&app, "/v1/product/add", json!({ "name": "Phone", "sku": "P1" })).await;

    let (status, body) = post(
        &app,
        "/v1/order/add",
        json!({ "product_id": 1, "amount": 2, "price": 10.0, "status": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["status"], 1);

    let (_, body) = get(&app, "/v1/order/list?limit=0&offset=0").await;
    assert_eq!(body["result"]["found"], 1);

    let (status, _) = post(
        &app,
        "/v1/order/add",
        json!({ "product_id": 1, "amount": 2, "price": 10.0, "status": 7 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_delete_reports_success_even_when_missing() {
    let store = InMemoryStore::new();
    let app = app(&store);

    let (status, body) = get(&app, "/v1/order/delete?id=42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "success");

    let (status, _) = get(&app, "/v1/order/delete?id=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn price_tier_lookup() {
    let app = app(&InMemoryStore::new());

    post(
        &app,
        "/v1/product/add",
        json!({
            "name": "Phone",
            "sku": "P1",
            "price": [{ "amount": 0, "price": 500.0 }, { "amount": 10, "price": 450.0 }]
        }),
    )
    .await;

    let (status, body) = get(&app, "/v1/product/price?id=1&amount=25").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["price"], 450.0);

    let (_, body) = get(&app, "/v1/product/price?id=1&amount=10").await;
    assert_eq!(body["result"]["price"], 500.0);

    let (status, _) = get(&app, "/v1/product/price?id=1&amount=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn product_delete_then_detail_is_not_found() {
    let app = app(&InMemoryStore::new());

    post(&app, "/v1/product/add", json!({ "name": "Phone", "sku": "P1" })).await;

    let (status, body) = get(&app, "/v1/product/delete?id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "success");

    let (status, _) = get(&app, "/v1/product/delete?id=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn metrics_are_exposed() {
    let app = app(&InMemoryStore::new());

    get(&app, "/v1/info").await;

    let response = app
        .clone()
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("http_requests_total"));
}

#[tokio::test]
async fn cors_preflight_is_allowed() {
    let app = app(&InMemoryStore::new());

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/v1/product/add")
                .header(header::ORIGIN, "http://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn product_add_and_update_accept_lowercase_sku() {
    let app = app(&InMemoryStore::new());

    let (status, body) = post(
        &app,
        "/v1/product/add",
        json!({ "name": "Phone", "sku": "P1", "category_id": [], "price": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["SKU"], "P1");

    let (status, body) = post(
        &app,
        "/v1/product/update",
        json!({ "id": 1, "name": "Phone X", "sku": "PX", "category_id": [], "price": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["name"], "Phone X");
    assert_eq!(body["result"]["SKU"], "PX");

    let (_, body) = get(&app, "/v1/product/detail?id=1").await;
    assert_eq!(body["result"]["sku"], "PX");
}
