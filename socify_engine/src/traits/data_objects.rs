use serde::{Deserialize, Serialize};

use crate::db_types::{Order, Transaction};

/// The outcome of an attempt to record a verified payment against an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentCompletion {
    /// The order moved from `pending` to `completed` and the transaction was stored, in one atomic step.
    Recorded { order: Order, transaction: Transaction },
    /// The order was no longer `pending`, so nothing was written. `transaction` is the one already on record for the
    /// order, if any.
    NotPending { order: Order, transaction: Option<Transaction> },
}

/// A user, along with the ids of the users on either side of their follow relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub followers: Vec<i64>,
    pub following: Vec<i64>,
}
