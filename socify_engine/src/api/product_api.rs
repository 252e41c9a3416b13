use std::fmt::Debug;

use log::*;
use serde::{Deserialize, Serialize};

use crate::{
    api::errors::ProductApiError,
    db_types::{NewProduct, Product, Rupees},
    helpers::ValidationErrors,
    traits::ProductManagement,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProductRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Price in whole rupees
    pub price: Option<i64>,
    #[serde(default)]
    pub stock: i64,
}

impl NewProductRequest {
    pub fn validate(&self) -> Result<NewProduct, ValidationErrors> {
        let name = self.name.as_deref().unwrap_or_default().trim();
        let mut errors = ValidationErrors::new();
        errors.check(!name.is_empty(), "name", "Product name is required");
        errors.check(self.price.is_some_and(|p| p >= 0), "price", "Price must be a non-negative integer");
        errors.check(self.stock >= 0, "stock", "Stock must be a non-negative integer");
        errors.into_result()?;
        let price = Rupees::from(self.price.unwrap_or_default());
        Ok(NewProduct::new(name, price).with_description(self.description.trim()).with_stock(self.stock))
    }
}

/// `ProductApi` manages the product catalogue.
pub struct ProductApi<B> {
    db: B,
}

impl<B> Debug for ProductApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProductApi")
    }
}

impl<B> ProductApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> ProductApi<B>
where B: ProductManagement
{
    pub async fn add_product(&self, request: NewProductRequest) -> Result<Product, ProductApiError> {
        let product = request.validate()?;
        let product = self.db.insert_product(product).await?;
        info!("🔄️🏷️ New product #{} ({}) at {}", product.id, product.name, product.price);
        Ok(product)
    }

    pub async fn products(&self) -> Result<Vec<Product>, ProductApiError> {
        let products = self.db.fetch_products().await?;
        Ok(products)
    }

    pub async fn product(&self, product_id: i64) -> Result<Product, ProductApiError> {
        self.db.fetch_product(product_id).await?.ok_or(ProductApiError::ProductNotFound(product_id))
    }
}
