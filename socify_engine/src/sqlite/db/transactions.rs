use sqlx::SqliteConnection;

use crate::{
    db_types::{NewTransaction, Transaction, TransactionStatusType},
    traits::OrderManagementError,
};

pub async fn insert_transaction(
    transaction: NewTransaction,
    status: TransactionStatusType,
    conn: &mut SqliteConnection,
) -> Result<Transaction, OrderManagementError> {
    let transaction = sqlx::query_as::<_, Transaction>(
        r#"
            INSERT INTO transactions (order_id, gateway_payment_id, gateway_order_id, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, order_id, gateway_payment_id, gateway_order_id, status, created_at, updated_at;
        "#,
    )
    .bind(transaction.order_id)
    .bind(transaction.gateway_payment_id)
    .bind(transaction.gateway_order_id)
    .bind(status)
    .fetch_one(conn)
    .await?;
    Ok(transaction)
}

pub async fn fetch_transaction_for_order(
    order_id: i64,
    conn: &mut SqliteConnection,
) -> Result<Option<Transaction>, OrderManagementError> {
    let transaction = sqlx::query_as::<_, Transaction>(
        r#"
            SELECT id, order_id, gateway_payment_id, gateway_order_id, status, created_at, updated_at
            FROM transactions
            WHERE order_id = $1;
        "#,
    )
    .bind(order_id)
    .fetch_optional(conn)
    .await?;
    Ok(transaction)
}
