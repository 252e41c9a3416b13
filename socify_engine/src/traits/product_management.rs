use thiserror::Error;

use crate::db_types::{NewProduct, Product};

#[derive(Debug, Clone, Error)]
pub enum ProductManagementError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for ProductManagementError {
    fn from(e: sqlx::Error) -> Self {
        ProductManagementError::DatabaseError(e.to_string())
    }
}

#[allow(async_fn_in_trait)]
pub trait ProductManagement {
    async fn insert_product(&self, product: NewProduct) -> Result<Product, ProductManagementError>;
    /// Fetches the product with the given id. If no product exists, `None` is returned.
    async fn fetch_product(&self, product_id: i64) -> Result<Option<Product>, ProductManagementError>;
    async fn fetch_products(&self) -> Result<Vec<Product>, ProductManagementError>;
}
