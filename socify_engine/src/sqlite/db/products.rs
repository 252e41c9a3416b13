use sqlx::SqliteConnection;

use crate::{
    db_types::{NewProduct, Product},
    traits::ProductManagementError,
};

pub async fn insert_product(
    product: NewProduct,
    conn: &mut SqliteConnection,
) -> Result<Product, ProductManagementError> {
    let product = sqlx::query_as::<_, Product>(
        r#"
            INSERT INTO products (name, description, price, stock)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, stock, created_at, updated_at;
        "#,
    )
    .bind(product.name)
    .bind(product.description)
    .bind(product.price)
    .bind(product.stock)
    .fetch_one(conn)
    .await?;
    Ok(product)
}

pub async fn fetch_product(
    product_id: i64,
    conn: &mut SqliteConnection,
) -> Result<Option<Product>, ProductManagementError> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, stock, created_at, updated_at FROM products WHERE id = $1",
    )
    .bind(product_id)
    .fetch_optional(conn)
    .await?;
    Ok(product)
}

pub async fn fetch_products(conn: &mut SqliteConnection) -> Result<Vec<Product>, ProductManagementError> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, stock, created_at, updated_at FROM products ORDER BY id ASC",
    )
    .fetch_all(conn)
    .await?;
    Ok(products)
}
