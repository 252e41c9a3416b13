use std::fmt::Display;

use serde::{Deserialize, Serialize};
use socify_engine::db_types::Transaction;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub message: String,
}

impl JsonResponse {
    pub fn new<S: Display>(message: S) -> Self {
        Self { message: message.to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentVerifiedResponse {
    pub message: String,
    pub transaction: Transaction,
}

impl PaymentVerifiedResponse {
    pub fn new(transaction: Transaction) -> Self {
        Self { message: "Payment verified successfully".into(), transaction }
    }
}
