use actix_web::{body::MessageBody, http::StatusCode, test, test::TestRequest, web::ServiceConfig, App};
use log::debug;
use serde_json::Value;

use crate::server::configure_extractors;

pub const KEY_SECRET: &str = "endpoint_test_key_secret";

pub async fn get_request(path: &str, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    send(TestRequest::get().uri(path), configure).await
}

pub async fn post_request(path: &str, body: Value, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    send(TestRequest::post().uri(path).set_json(body), configure).await
}

pub async fn post_raw(path: &str, body: &'static str, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    let req =
        TestRequest::post().uri(path).insert_header(("content-type", "application/json")).set_payload(body);
    send(req, configure).await
}

async fn send(req: TestRequest, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    let _ = env_logger::try_init();
    let app = App::new().configure(configure_extractors).configure(configure);
    let service = test::init_service(app).await;
    debug!("Making request");
    let res = test::call_service(&service, req.to_request()).await;
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    (status, body)
}

pub fn json(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("Response was not JSON. {e}: {body}"))
}
