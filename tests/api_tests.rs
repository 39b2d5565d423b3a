mod common;

use axum::http::StatusCode;
use product_catalog::app::product::model::Product;
use serde_json::json;

use common::create_test_server;

#[tokio::test]
async fn test_create_and_get_product() {
    let server = create_test_server().await;

    let response = server
        .post("/product")
        .json(&json!({
            "name": "Pen",
            "description": "Blue pen",
            "price": 1.5,
            "qty": 100
        }))
        .await;

    response.assert_status_ok();
    let expected = r#"{"id":1,"name":"Pen","description":"Blue pen","price":1.5,"qty":100}"#;
    assert_eq!(response.text(), expected);

    let response = server.get("/product/1").await;
    response.assert_status_ok();
    assert_eq!(response.text(), expected);
}

#[tokio::test]
async fn test_list_products_in_insertion_order() {
    let server = create_test_server().await;

    let response = server.get("/product").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "[]");

    for name in ["Pen", "Pencil", "Eraser"] {
        server
            .post("/product")
            .json(&json!({"name": name, "description": "", "price": 1, "qty": 1}))
            .await
            .assert_status_ok();
    }

    let products: Vec<Product> = server.get("/product").await.json();
    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Pen", "Pencil", "Eraser"]);
    assert_eq!(products.iter().map(|p| p.id).collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(products[0].price, 1.0);
}

#[tokio::test]
async fn test_duplicate_name_conflict() {
    let server = create_test_server().await;

    let body = json!({"name": "Pen", "description": "first", "price": 1.5, "qty": 1});
    server.post("/product").json(&body).await.assert_status_ok();

    let response = server
        .post("/product")
        .json(&json!({"name": "Pen", "description": "second", "price": 9.0, "qty": 9}))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let error: serde_json::Value = response.json();
    assert_eq!(error["error"], "CONFLICT");
    assert_eq!(error["code"], 409);

    let original: Product = server.get("/product/1").await.json();
    assert_eq!(original.description, "first");
    assert_eq!(original.qty, 1);
}

#[tokio::test]
async fn test_rename_to_existing_name_conflict() {
    let server = create_test_server().await;

    for name in ["Pen", "Marker"] {
        server
            .post("/product")
            .json(&json!({"name": name, "description": "", "price": 1.5, "qty": 1}))
            .await
            .assert_status_ok();
    }

    let response = server
        .put("/product/2")
        .json(&json!({"name": "Pen", "description": "renamed", "price": 3.0, "qty": 3}))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let error: serde_json::Value = response.json();
    assert_eq!(error["error"], "CONFLICT");

    let unchanged: Product = server.get("/product/2").await.json();
    assert_eq!(unchanged.name, "Marker");
    assert_eq!(unchanged.qty, 1);
}

#[tokio::test]
async fn test_missing_field_rejected() {
    let server = create_test_server().await;

    let response = server
        .post("/product")
        .json(&json!({"name": "Pen", "price": 1.5, "qty": 1}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let error: serde_json::Value = response.json();
    assert_eq!(error["error"], "BAD_REQUEST");

    let products: Vec<Product> = server.get("/product").await.json();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let server = create_test_server().await;

    server
        .post("/product")
        .json(&json!({"name": "Pen", "description": "Blue pen", "price": 1.5, "qty": 100}))
        .await
        .assert_status_ok();

    let response = server
        .put("/product/1")
        .json(&json!({"name": "Marker", "description": "Red", "price": 2.75, "qty": -2}))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.text(),
        r#"{"id":1,"name":"Marker","description":"Red","price":2.75,"qty":-2}"#
    );

    // 部分字段不做合并
    server
        .put("/product/1")
        .json(&json!({"name": "Marker"}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .put("/product/99")
        .json(&json!({"name": "Ghost", "description": "", "price": 0, "qty": 0}))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product() {
    let server = create_test_server().await;

    server
        .post("/product")
        .json(&json!({"name": "Pen", "description": "Blue pen", "price": 1.5, "qty": 100}))
        .await
        .assert_status_ok();

    let response = server.delete("/product/1").await;
    response.assert_status_ok();
    let deleted: Product = response.json();
    assert_eq!(deleted.name, "Pen");
    assert_eq!(deleted.qty, 100);

    server.get("/product/1").await.assert_status(StatusCode::NOT_FOUND);
    server.delete("/product/1").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_unknown_product() {
    let server = create_test_server().await;

    let response = server.get("/product/12").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let error: serde_json::Value = response.json();
    assert_eq!(error["error"], "NOT_FOUND");
}
