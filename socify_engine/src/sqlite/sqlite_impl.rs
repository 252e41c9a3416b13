//! `SqliteDatabase` is a concrete implementation of a Socify engine backend.
//!
//! Unsurprisingly, it uses SQLite as the backend and implements all the storage traits defined in the [`traits`]
//! module.
//!
//! [`traits`]: crate::traits
use std::fmt::Debug;

use log::*;
use sqlx::{migrate::MigrateError, SqlitePool};

use super::db::{db_url, follows, new_pool, orders, products, transactions, users};
use crate::{
    db_types::{
        Follow,
        NewOrder,
        NewProduct,
        NewTransaction,
        NewUser,
        Order,
        OrderStatusType,
        Product,
        Transaction,
        TransactionStatusType,
        User,
        UserSummary,
    },
    traits::{
        OrderManagement,
        OrderManagementError,
        PaymentCompletion,
        ProductManagement,
        ProductManagementError,
        SocialGraphError,
        SocialGraphManagement,
    },
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({})", self.url)
    }
}

impl SqliteDatabase {
    /// Creates a new database API object, using the `SOCIFY_DATABASE_URL` environment variable (or the default) to
    /// locate the database.
    pub async fn new(max_connections: u32) -> Result<Self, sqlx::Error> {
        let url = db_url();
        SqliteDatabase::new_with_url(&url, max_connections).await
    }

    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = new_pool(url, max_connections).await?;
        debug!("🗃️ Opened a pool of up to {max_connections} connections to {url}");
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Returns a reference to the database connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Brings the schema up to date. Migrations that have already been applied are skipped.
    pub async fn run_migrations(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./src/sqlite/migrations").run(&self.pool).await?;
        info!("🗃️ Database migrations are up to date");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl OrderManagement for SqliteDatabase {
    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderManagementError> {
        let mut conn = self.pool.acquire().await?;
        let order = orders::insert_order(order, &mut conn).await?;
        debug!("🗃️ Order #{} has been saved in the DB for {}", order.id, order.amount);
        Ok(order)
    }

    async fn fetch_order(&self, order_id: i64) -> Result<Option<Order>, OrderManagementError> {
        let mut conn = self.pool.acquire().await?;
        orders::fetch_order(order_id, &mut conn).await
    }

    async fn set_gateway_order_id(&self, order_id: i64, gateway_order_id: &str) -> Result<Order, OrderManagementError> {
        let mut conn = self.pool.acquire().await?;
        let order = orders::set_gateway_order_id(order_id, gateway_order_id, &mut conn)
            .await?
            .ok_or(OrderManagementError::OrderNotFound(order_id))?;
        debug!("🗃️ Order #{order_id} is linked to gateway order {gateway_order_id}");
        Ok(order)
    }

    async fn mark_order_failed(&self, order_id: i64) -> Result<Order, OrderManagementError> {
        let mut tx = self.pool.begin().await?;
        let updated =
            orders::compare_and_set_status(order_id, OrderStatusType::Pending, OrderStatusType::Failed, &mut tx)
                .await?;
        let result = match updated {
            Some(order) => {
                info!("🗃️ Order #{order_id} has been marked as failed");
                Ok(order)
            },
            None => match orders::fetch_order(order_id, &mut tx).await? {
                Some(_) => Err(OrderManagementError::OrderNotPending(order_id)),
                None => Err(OrderManagementError::OrderNotFound(order_id)),
            },
        };
        tx.commit().await?;
        result
    }

    /// Takes a verified payment, and in a single atomic transaction,
    /// * moves the order from `pending` to `completed`. The status check is part of the update itself.
    /// * if (and only if) that succeeded, stores the transaction record with status `completed`.
    ///
    /// If the order was not pending, the current order and any existing transaction are returned instead, and nothing
    /// is written.
    async fn complete_order(&self, transaction: NewTransaction) -> Result<PaymentCompletion, OrderManagementError> {
        let order_id = transaction.order_id;
        let mut tx = self.pool.begin().await?;
        let updated =
            orders::compare_and_set_status(order_id, OrderStatusType::Pending, OrderStatusType::Completed, &mut tx)
                .await?;
        let completion = match updated {
            Some(order) => {
                let transaction =
                    transactions::insert_transaction(transaction, TransactionStatusType::Completed, &mut tx).await?;
                debug!("🗃️ Order #{order_id} completed by payment {}", transaction.gateway_payment_id);
                PaymentCompletion::Recorded { order, transaction }
            },
            None => {
                let order =
                    orders::fetch_order(order_id, &mut tx).await?.ok_or(OrderManagementError::OrderNotFound(order_id))?;
                let transaction = transactions::fetch_transaction_for_order(order_id, &mut tx).await?;
                debug!("🗃️ Order #{order_id} is {}. Nothing was written.", order.status);
                PaymentCompletion::NotPending { order, transaction }
            },
        };
        tx.commit().await?;
        Ok(completion)
    }

    async fn fetch_transaction_for_order(&self, order_id: i64) -> Result<Option<Transaction>, OrderManagementError> {
        let mut conn = self.pool.acquire().await?;
        transactions::fetch_transaction_for_order(order_id, &mut conn).await
    }
}

impl ProductManagement for SqliteDatabase {
    async fn insert_product(&self, product: NewProduct) -> Result<Product, ProductManagementError> {
        let mut conn = self.pool.acquire().await?;
        let product = products::insert_product(product, &mut conn).await?;
        debug!("🗃️ Product #{} ({}) has been saved in the DB", product.id, product.name);
        Ok(product)
    }

    async fn fetch_product(&self, product_id: i64) -> Result<Option<Product>, ProductManagementError> {
        let mut conn = self.pool.acquire().await?;
        products::fetch_product(product_id, &mut conn).await
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, ProductManagementError> {
        let mut conn = self.pool.acquire().await?;
        products::fetch_products(&mut conn).await
    }
}

impl SocialGraphManagement for SqliteDatabase {
    async fn insert_user(&self, user: NewUser) -> Result<User, SocialGraphError> {
        let mut conn = self.pool.acquire().await?;
        let user = users::insert_user(user, &mut conn).await?;
        debug!("🗃️ User #{} ({}) has been saved in the DB", user.id, user.username);
        Ok(user)
    }

    async fn fetch_user(&self, user_id: i64) -> Result<Option<User>, SocialGraphError> {
        let mut conn = self.pool.acquire().await?;
        users::fetch_user(user_id, &mut conn).await
    }

    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, SocialGraphError> {
        let mut conn = self.pool.acquire().await?;
        users::fetch_user_by_email(email, &mut conn).await
    }

    async fn fetch_user_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, SocialGraphError> {
        let mut conn = self.pool.acquire().await?;
        users::fetch_user_by_username_or_email(username, email, &mut conn).await
    }

    async fn fetch_users(&self) -> Result<Vec<User>, SocialGraphError> {
        let mut conn = self.pool.acquire().await?;
        users::fetch_users(&mut conn).await
    }

    async fn insert_follow(&self, follower_id: i64, followed_id: i64) -> Result<bool, SocialGraphError> {
        let mut conn = self.pool.acquire().await?;
        follows::insert_follow(follower_id, followed_id, &mut conn).await
    }

    async fn remove_follow(&self, follower_id: i64, followed_id: i64) -> Result<bool, SocialGraphError> {
        let mut conn = self.pool.acquire().await?;
        follows::remove_follow(follower_id, followed_id, &mut conn).await
    }

    async fn fetch_follows(&self) -> Result<Vec<Follow>, SocialGraphError> {
        let mut conn = self.pool.acquire().await?;
        follows::fetch_follows(&mut conn).await
    }

    async fn fetch_followers(&self, user_id: i64) -> Result<Vec<UserSummary>, SocialGraphError> {
        let mut conn = self.pool.acquire().await?;
        follows::fetch_followers(user_id, &mut conn).await
    }

    async fn fetch_following(&self, user_id: i64) -> Result<Vec<UserSummary>, SocialGraphError> {
        let mut conn = self.pool.acquire().await?;
        follows::fetch_following(user_id, &mut conn).await
    }
}
