use serde::{Deserialize, Serialize};

use crate::{
    db_types::{Order, Transaction},
    helpers::ValidationErrors,
    traits::GatewayOrder,
};

/// A purchase request. Every field is optional at the wire level so that missing fields are reported per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub product_id: Option<i64>,
    pub quantity: Option<i64>,
    pub user_id: Option<i64>,
}

impl CreateOrderRequest {
    pub fn new(product_id: i64, quantity: i64, user_id: i64) -> Self {
        Self { product_id: Some(product_id), quantity: Some(quantity), user_id: Some(user_id) }
    }

    /// Returns `(product_id, quantity, user_id)` if the request is well-formed.
    pub fn validate(&self) -> Result<(i64, i64, i64), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(self.product_id.is_some(), "product_id", "Product ID is required");
        errors.check(self.quantity.is_some_and(|q| q > 0), "quantity", "Quantity should be a positive integer");
        errors.check(self.user_id.is_some(), "user_id", "User ID is required");
        match (self.product_id, self.quantity, self.user_id) {
            (Some(p), Some(q), Some(u)) if errors.is_empty() => Ok((p, q, u)),
            _ => Err(errors),
        }
    }
}

/// The result of a successful order intake: the gateway's order handle, and the local order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreated {
    #[serde(rename = "order")]
    pub gateway_order: GatewayOrder,
    #[serde(rename = "newOrder")]
    pub order: Order,
}

/// The payload the gateway's checkout hands back to the client after a payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyPaymentRequest {
    pub razorpay_payment_id: Option<String>,
    pub razorpay_order_id: Option<String>,
    pub razorpay_signature: Option<String>,
    pub order_id: Option<i64>,
}

/// A validated [`VerifyPaymentRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentCallback {
    pub gateway_payment_id: String,
    pub gateway_order_id: String,
    pub signature: String,
    pub order_id: i64,
}

impl VerifyPaymentRequest {
    pub fn new(
        payment_id: impl Into<String>,
        gateway_order_id: impl Into<String>,
        signature: impl Into<String>,
        order_id: i64,
    ) -> Self {
        Self {
            razorpay_payment_id: Some(payment_id.into()),
            razorpay_order_id: Some(gateway_order_id.into()),
            razorpay_signature: Some(signature.into()),
            order_id: Some(order_id),
        }
    }

    /// The ids and the signature are passed on exactly as received, since they are the signed message. Blank values
    /// count as missing.
    pub fn validate(&self) -> Result<PaymentCallback, ValidationErrors> {
        fn present(s: &Option<String>) -> Option<String> {
            s.clone().filter(|s| !s.trim().is_empty())
        }
        let payment_id = present(&self.razorpay_payment_id);
        let gateway_order_id = present(&self.razorpay_order_id);
        let signature = present(&self.razorpay_signature);
        let mut errors = ValidationErrors::new();
        errors.check(payment_id.is_some(), "razorpay_payment_id", "Payment ID is required");
        errors.check(gateway_order_id.is_some(), "razorpay_order_id", "Gateway order ID is required");
        errors.check(signature.is_some(), "razorpay_signature", "Signature is required");
        errors.check(self.order_id.is_some(), "order_id", "Order ID is required");
        match (payment_id, gateway_order_id, signature, self.order_id) {
            (Some(gateway_payment_id), Some(gateway_order_id), Some(signature), Some(order_id)) => {
                Ok(PaymentCallback { gateway_payment_id, gateway_order_id, signature, order_id })
            },
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentVerified {
    pub order: Order,
    pub transaction: Transaction,
    /// True if this callback had already been processed, and `transaction` is the one recorded at the time.
    pub replayed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub order: Order,
    pub transaction: Option<Transaction>,
}
