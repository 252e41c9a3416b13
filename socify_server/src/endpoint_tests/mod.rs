use actix_web::{http::StatusCode, web::ServiceConfig};

use crate::routes::{health, index};

mod helpers;
mod mocks;
mod products;
mod users;

fn configure_misc(cfg: &mut ServiceConfig) {
    cfg.service(health).service(index);
}

#[actix_web::test]
async fn health_check() {
    let (status, body) = helpers::get_request("/health", configure_misc).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "👍️\n");
}

#[actix_web::test]
async fn index_page() {
    let (status, body) = helpers::get_request("/", configure_misc).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Socify Running...");
}

#[actix_web::test]
async fn unknown_route() {
    let (status, _) = helpers::get_request("/api/nothing/here", configure_misc).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
