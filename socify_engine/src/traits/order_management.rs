use thiserror::Error;

use crate::{
    db_types::{NewOrder, NewTransaction, Order, Transaction},
    traits::PaymentCompletion,
};

#[derive(Debug, Clone, Error)]
pub enum OrderManagementError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("The requested order {0} does not exist")]
    OrderNotFound(i64),
    #[error("Order {0} is not pending, so it cannot be changed")]
    OrderNotPending(i64),
}

impl From<sqlx::Error> for OrderManagementError {
    fn from(e: sqlx::Error) -> Self {
        OrderManagementError::DatabaseError(e.to_string())
    }
}

/// The `OrderManagement` trait defines behaviour for storing orders and the transactions that pay for them.
///
/// Implementations must guarantee that [`complete_order`](OrderManagement::complete_order) is atomic: the status
/// change and the transaction record are written together or not at all, and the status change only happens if the
/// order is still `pending` at the moment of writing.
#[allow(async_fn_in_trait)]
pub trait OrderManagement {
    /// Stores a new order with `pending` status and returns the stored record.
    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderManagementError>;

    /// Fetches the order with the given id. If no order exists, `None` is returned.
    async fn fetch_order(&self, order_id: i64) -> Result<Option<Order>, OrderManagementError>;

    /// Records the id of the gateway order created for this order.
    async fn set_gateway_order_id(&self, order_id: i64, gateway_order_id: &str) -> Result<Order, OrderManagementError>;

    /// Moves a `pending` order to `failed`. Orders in any other state are left alone and
    /// [`OrderManagementError::OrderNotPending`] is returned.
    async fn mark_order_failed(&self, order_id: i64) -> Result<Order, OrderManagementError>;

    /// Atomically transitions the order from `pending` to `completed` and records the transaction.
    ///
    /// If the order is not `pending`, nothing is written and [`PaymentCompletion::NotPending`] is returned.
    /// If the order does not exist, [`OrderManagementError::OrderNotFound`] is returned.
    async fn complete_order(&self, transaction: NewTransaction) -> Result<PaymentCompletion, OrderManagementError>;

    /// Fetches the transaction recorded for the given order, if there is one.
    async fn fetch_transaction_for_order(&self, order_id: i64) -> Result<Option<Transaction>, OrderManagementError>;
}
