use serde::{Deserialize, Serialize};
use serde_json::Value;
use socify_common::Paise;

/// The body of a `POST /orders` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRazorpayOrder {
    /// The order amount in the currency's minor unit (paise for INR).
    pub amount: Paise,
    pub currency: String,
    pub receipt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Value>,
}

impl NewRazorpayOrder {
    pub fn new<S: Into<String>>(amount: Paise, currency: S, receipt: S) -> Self {
        Self { amount, currency: currency.into(), receipt: receipt.into(), notes: None }
    }

    pub fn with_notes(mut self, notes: Value) -> Self {
        self.notes = Some(notes);
        self
    }
}

/// An order object as returned by the Razorpay Orders API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RazorpayOrder {
    pub id: String,
    #[serde(default)]
    pub entity: String,
    pub amount: Paise,
    #[serde(default)]
    pub amount_paid: Paise,
    #[serde(default)]
    pub amount_due: Paise,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    pub status: String,
    #[serde(default)]
    pub attempts: i64,
    #[serde(default)]
    pub notes: Value,
    /// Unix timestamp, in seconds
    #[serde(default)]
    pub created_at: i64,
}
