use serde::{Deserialize, Serialize};
use socify_common::Paise;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum PaymentGatewayError {
    #[error("The payment gateway could not be reached. {0}")]
    Unavailable(String),
    #[error("The payment gateway rejected the request. {0}")]
    Rejected(String),
}

/// A request for a new order on the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayOrderRequest {
    /// The amount in minor currency units
    pub amount: Paise,
    pub currency: String,
    pub receipt: String,
}

/// The payment gateway's own handle for an order. This is distinct from the local order id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayOrder {
    pub id: String,
    pub entity: String,
    pub amount: Paise,
    pub amount_paid: Paise,
    pub amount_due: Paise,
    pub currency: String,
    pub receipt: Option<String>,
    pub status: String,
    pub attempts: i64,
    pub created_at: i64,
}

/// The remote payment processor.
#[allow(async_fn_in_trait)]
pub trait PaymentGateway {
    async fn create_order(&self, request: GatewayOrderRequest) -> Result<GatewayOrder, PaymentGatewayError>;
}
