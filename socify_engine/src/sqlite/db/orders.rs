use log::trace;
use sqlx::SqliteConnection;

use crate::{
    db_types::{NewOrder, Order, OrderStatusType},
    traits::OrderManagementError,
};

/// Inserts a new, `pending` order into the database using the given connection. This is not atomic. You can embed
/// this call inside a transaction if you need to ensure atomicity, and pass `&mut tx` as the connection argument.
pub async fn insert_order(order: NewOrder, conn: &mut SqliteConnection) -> Result<Order, OrderManagementError> {
    let order = sqlx::query_as::<_, Order>(
        r#"
            INSERT INTO orders (product_id, user_id, quantity, amount, currency, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, product_id, user_id, quantity, amount, currency, status, gateway_order_id, created_at,
                updated_at;
        "#,
    )
    .bind(order.product_id)
    .bind(order.user_id)
    .bind(order.quantity)
    .bind(order.amount)
    .bind(order.currency)
    .bind(OrderStatusType::Pending)
    .fetch_one(conn)
    .await?;
    Ok(order)
}

pub async fn fetch_order(order_id: i64, conn: &mut SqliteConnection) -> Result<Option<Order>, OrderManagementError> {
    let order = sqlx::query_as::<_, Order>(
        r#"
            SELECT id, product_id, user_id, quantity, amount, currency, status, gateway_order_id, created_at, updated_at
            FROM orders
            WHERE id = $1;
        "#,
    )
    .bind(order_id)
    .fetch_optional(conn)
    .await?;
    Ok(order)
}

pub async fn set_gateway_order_id(
    order_id: i64,
    gateway_order_id: &str,
    conn: &mut SqliteConnection,
) -> Result<Option<Order>, OrderManagementError> {
    let order = sqlx::query_as::<_, Order>(
        r#"
            UPDATE orders SET gateway_order_id = $1, updated_at = CURRENT_TIMESTAMP
            WHERE id = $2
            RETURNING id, product_id, user_id, quantity, amount, currency, status, gateway_order_id, created_at,
                updated_at;
        "#,
    )
    .bind(gateway_order_id)
    .bind(order_id)
    .fetch_optional(conn)
    .await?;
    Ok(order)
}

/// Changes the order status from `from` to `to`, but only if the order currently has status `from`. The check and the
/// write are a single statement, so two concurrent callers can never both succeed.
///
/// Returns the updated order, or `None` if the order does not exist or did not have status `from`.
pub async fn compare_and_set_status(
    order_id: i64,
    from: OrderStatusType,
    to: OrderStatusType,
    conn: &mut SqliteConnection,
) -> Result<Option<Order>, OrderManagementError> {
    trace!("🗃️ Order #{order_id}: attempting {from} -> {to}");
    let order = sqlx::query_as::<_, Order>(
        r#"
            UPDATE orders SET status = $1, updated_at = CURRENT_TIMESTAMP
            WHERE id = $2 AND status = $3
            RETURNING id, product_id, user_id, quantity, amount, currency, status, gateway_order_id, created_at,
                updated_at;
        "#,
    )
    .bind(to)
    .bind(order_id)
    .bind(from)
    .fetch_optional(conn)
    .await?;
    Ok(order)
}
