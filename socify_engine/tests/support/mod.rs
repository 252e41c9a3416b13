#![allow(dead_code)]

use socify_common::Secret;
use socify_engine::{
    db_types::{NewUser, Product, User},
    helpers::calculate_signature,
    test_utils::{
        fake_gateway::FakeGateway,
        prepare_env::{prepare_test_env, random_db_path},
    },
    traits::SocialGraphManagement,
    NewProductRequest,
    OrderFlowApi,
    ProductApi,
    SqliteDatabase,
};

pub const KEY_SECRET: &str = "socify_test_key_secret";

#[derive(Debug)]
pub struct TestSystem {
    pub url: String,
    pub db: SqliteDatabase,
    pub gateway: FakeGateway,
    pub api: OrderFlowApi<SqliteDatabase, FakeGateway>,
}

impl TestSystem {
    pub async fn new() -> Self {
        let url = random_db_path();
        prepare_test_env(&url).await;
        let db = SqliteDatabase::new_with_url(&url, 5).await.expect("Error creating connection to database");
        let gateway = FakeGateway::new();
        let api = OrderFlowApi::new(db.clone(), gateway.clone(), Secret::new(KEY_SECRET.to_string()));
        Self { url, db, gateway, api }
    }

    pub async fn add_user(&self, username: &str) -> User {
        let user = NewUser::new(username.to_string(), format!("{username}@x.com"), "not-a-real-hash".to_string());
        self.db.insert_user(user).await.expect("Error inserting user")
    }

    /// Adds a product through the catalogue API, exactly as `POST /api/product/add` would.
    pub async fn add_product(&self, name: &str, rupees: i64) -> Product {
        let request =
            NewProductRequest { name: Some(name.to_string()), price: Some(rupees), stock: 10, ..Default::default() };
        ProductApi::new(self.db.clone()).add_product(request).await.expect("Error adding product")
    }

    pub async fn transaction_count(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM transactions")
            .fetch_one(self.db.pool())
            .await
            .expect("Error counting transactions")
    }

    pub async fn shutdown(self) {
        self.db.close().await;
        socify_engine::test_utils::prepare_env::drop_database(&self.url).await;
    }
}

pub fn sign(gateway_order_id: &str, payment_id: &str) -> String {
    calculate_signature(KEY_SECRET, gateway_order_id, payment_id).expect("Error signing")
}
