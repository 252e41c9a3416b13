use actix_web::{http::StatusCode, web, web::ServiceConfig};
use serde_json::json;
use socify_engine::{
    db_types::{Follow, UserSummary},
    traits::SocialGraphError,
    SocialApi,
};

use super::{
    helpers::{get_request, json, post_raw, post_request},
    mocks::{user, MockBackend, MockGateway},
};
use crate::server::api_scope;

fn register(cfg: &mut ServiceConfig, backend: MockBackend) {
    cfg.app_data(web::Data::new(SocialApi::new(backend))).service(api_scope::<MockBackend, MockGateway>());
}

/// Looks up `ann@x.com` and `bob@x.com` as users 1 and 2.
fn expect_ann_and_bob(backend: &mut MockBackend) {
    backend.expect_fetch_user_by_email().returning(|email| match email {
        "ann@x.com" => Ok(Some(user(1, "ann"))),
        "bob@x.com" => Ok(Some(user(2, "bob"))),
        _ => Ok(None),
    });
}

#[actix_web::test]
async fn add_user() {
    fn configure(cfg: &mut ServiceConfig) {
        let mut backend = MockBackend::new();
        backend
            .expect_fetch_user_by_username_or_email()
            .withf(|username, email| username == "ann" && email == "ann@x.com")
            .times(1)
            .returning(|_, _| Ok(None));
        backend
            .expect_insert_user()
            .withf(|u| u.username == "ann" && u.email == "ann@x.com" && u.password_hash.starts_with("$argon2"))
            .times(1)
            .returning(|_| Ok(user(1, "ann")));
        register(cfg, backend);
    }
    let body = json!({"username": " ann ", "email": "Ann@X.com", "password": "hunter22"});
    let (status, body) = post_request("/api/user/add", body, configure).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, r#"{"message":"User created successfully"}"#);
}

#[actix_web::test]
async fn add_existing_user() {
    fn configure(cfg: &mut ServiceConfig) {
        let mut backend = MockBackend::new();
        backend.expect_fetch_user_by_username_or_email().returning(|_, _| Ok(Some(user(1, "ann"))));
        register(cfg, backend);
    }
    let body = json!({"username": "ann", "email": "ann@x.com", "password": "hunter22"});
    let (status, body) = post_request("/api/user/add", body, configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"User already exists"}"#);
}

#[actix_web::test]
async fn add_user_with_missing_fields() {
    fn configure(cfg: &mut ServiceConfig) {
        register(cfg, MockBackend::new());
    }
    let (status, body) = post_request("/api/user/add", json!({"username": "ann"}), configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = json(&body)["errors"].as_array().cloned().expect("errors array");
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e["field"] == "email"));
    assert!(errors.iter().any(|e| e["field"] == "password"));
}

#[actix_web::test]
async fn add_user_with_malformed_body() {
    fn configure(cfg: &mut ServiceConfig) {
        register(cfg, MockBackend::new());
    }
    let (status, body) = post_raw("/api/user/add", r#"{"username": "ann""#, configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json(&body)["error"].as_str().unwrap().starts_with("Could not read request body"));
}

#[actix_web::test]
async fn add_user_database_failure() {
    fn configure(cfg: &mut ServiceConfig) {
        let mut backend = MockBackend::new();
        backend.expect_fetch_user_by_username_or_email().returning(|_, _| Ok(None));
        backend.expect_insert_user().returning(|_| Err(SocialGraphError::DatabaseError("disk full".into())));
        register(cfg, backend);
    }
    let body = json!({"username": "ann", "email": "ann@x.com", "password": "hunter22"});
    let (status, body) = post_request("/api/user/add", body, configure).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Error creating user"}"#);
}

#[actix_web::test]
async fn all_users() {
    fn configure(cfg: &mut ServiceConfig) {
        let mut backend = MockBackend::new();
        backend.expect_fetch_users().returning(|| Ok(vec![user(1, "ann"), user(2, "bob")]));
        backend.expect_fetch_follows().returning(|| {
            Ok(vec![Follow { follower_id: 1, followed_id: 2, follow_date: chrono::Utc::now() }])
        });
        register(cfg, backend);
    }
    let (status, body) = get_request("/api/user/all", configure).await;
    assert_eq!(status, StatusCode::OK);
    let users = json(&body);
    assert_eq!(users[0]["username"], "ann");
    assert_eq!(users[0]["following"], json!([2]));
    assert_eq!(users[1]["followers"], json!([1]));
    assert!(users[0].get("password_hash").is_none());
}

#[actix_web::test]
async fn follow_user() {
    fn configure(cfg: &mut ServiceConfig) {
        let mut backend = MockBackend::new();
        expect_ann_and_bob(&mut backend);
        backend.expect_insert_follow().withf(|a, b| *a == 1 && *b == 2).times(1).returning(|_, _| Ok(true));
        register(cfg, backend);
    }
    let (status, body) =
        post_request("/api/user/follow/bob@x.com", json!({"followerEmail": "ann@x.com"}), configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"message":"User followed successfully"}"#);
}

#[actix_web::test]
async fn follow_twice() {
    fn configure(cfg: &mut ServiceConfig) {
        let mut backend = MockBackend::new();
        expect_ann_and_bob(&mut backend);
        backend.expect_insert_follow().returning(|_, _| Ok(false));
        register(cfg, backend);
    }
    let (status, body) =
        post_request("/api/user/follow/bob@x.com", json!({"followerEmail": "ann@x.com"}), configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Already following this user"}"#);
}

#[actix_web::test]
async fn follow_unknown_user() {
    fn configure(cfg: &mut ServiceConfig) {
        let mut backend = MockBackend::new();
        expect_ann_and_bob(&mut backend);
        register(cfg, backend);
    }
    let (status, body) =
        post_request("/api/user/follow/zed@x.com", json!({"followerEmail": "ann@x.com"}), configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"User not found"}"#);
}

#[actix_web::test]
async fn follow_yourself() {
    fn configure(cfg: &mut ServiceConfig) {
        register(cfg, MockBackend::new());
    }
    let (status, body) =
        post_request("/api/user/follow/ann@x.com", json!({"followerEmail": "ann@x.com"}), configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["errors"][0]["message"], "You cannot follow yourself");
}

#[actix_web::test]
async fn unfollow_user() {
    fn configure(cfg: &mut ServiceConfig) {
        let mut backend = MockBackend::new();
        expect_ann_and_bob(&mut backend);
        backend.expect_remove_follow().withf(|a, b| *a == 1 && *b == 2).times(1).returning(|_, _| Ok(true));
        register(cfg, backend);
    }
    let (status, body) =
        post_request("/api/user/unfollow/bob@x.com", json!({"followerEmail": "ann@x.com"}), configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"message":"User unfollowed successfully"}"#);
}

#[actix_web::test]
async fn followers_and_following() {
    fn configure(cfg: &mut ServiceConfig) {
        let mut backend = MockBackend::new();
        expect_ann_and_bob(&mut backend);
        backend.expect_fetch_followers().withf(|id| *id == 2).returning(|_| {
            Ok(vec![UserSummary { id: 1, username: "ann".into(), email: "ann@x.com".into() }])
        });
        backend.expect_fetch_following().withf(|id| *id == 2).returning(|_| Ok(vec![]));
        register(cfg, backend);
    }
    let (status, body) = get_request("/api/user/followers/bob@x.com", configure).await;
    assert_eq!(status, StatusCode::OK);
    let followers: Vec<UserSummary> = serde_json::from_str(&body).unwrap();
    assert_eq!(followers, vec![UserSummary { id: 1, username: "ann".into(), email: "ann@x.com".into() }]);

    let (status, body) = get_request("/api/user/following/bob@x.com", configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}
