use actix_web::{http::StatusCode, web, web::ServiceConfig};
use serde_json::json;
use socify_engine::{db_types::Rupees, ProductApi};

use super::{
    helpers::{get_request, json, post_request},
    mocks::{product, MockBackend, MockGateway},
};
use crate::server::api_scope;

fn register(cfg: &mut ServiceConfig, backend: MockBackend) {
    cfg.app_data(web::Data::new(ProductApi::new(backend))).service(api_scope::<MockBackend, MockGateway>());
}

#[actix_web::test]
async fn add_product() {
    fn configure(cfg: &mut ServiceConfig) {
        let mut backend = MockBackend::new();
        backend
            .expect_insert_product()
            .withf(|p| p.name == "Mug" && p.price == Rupees::from(100) && p.stock == 5)
            .times(1)
            .returning(|p| Ok(product(1, p.price.value())));
        register(cfg, backend);
    }
    let body = json!({"name": "Mug", "description": "A mug", "price": 100, "stock": 5});
    let (status, body) = post_request("/api/product/add", body, configure).await;
    assert_eq!(status, StatusCode::CREATED);
    let product = json(&body);
    assert_eq!(product["id"], 1);
    assert_eq!(product["price"], 100);
}

#[actix_web::test]
async fn add_invalid_product() {
    fn configure(cfg: &mut ServiceConfig) {
        register(cfg, MockBackend::new());
    }
    let (status, body) = post_request("/api/product/add", json!({"price": -5}), configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json(&body)["errors"].as_array().is_some_and(|e| !e.is_empty()));
}

#[actix_web::test]
async fn all_products() {
    fn configure(cfg: &mut ServiceConfig) {
        let mut backend = MockBackend::new();
        backend.expect_fetch_products().returning(|| Ok(vec![product(1, 100), product(2, 250)]));
        register(cfg, backend);
    }
    let (status, body) = get_request("/api/product/all", configure).await;
    assert_eq!(status, StatusCode::OK);
    let products = json(&body);
    assert_eq!(products.as_array().map(Vec::len), Some(2));
    assert_eq!(products[1]["price"], 250);
}

#[actix_web::test]
async fn product_by_id() {
    fn configure(cfg: &mut ServiceConfig) {
        let mut backend = MockBackend::new();
        backend.expect_fetch_product().returning(|id| Ok(if id == 1 { Some(product(1, 100)) } else { None }));
        register(cfg, backend);
    }
    let (status, body) = get_request("/api/product/1", configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["name"], "Mug");

    let (status, body) = get_request("/api/product/2", configure).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"Product not found"}"#);
}
