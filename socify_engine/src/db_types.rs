//! Data types stored in, and returned from, the Socify ledger store.
use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
pub use socify_common::{Paise, Rupees};
use socify_common::INR_CURRENCY_CODE;
use sqlx::{FromRow, Type};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("Invalid status: {0}")]
pub struct ConversionError(String);

//--------------------------------------   OrderStatusType     ---------------------------------------------------------
/// The lifecycle of an order: `Pending -> Completed` via a verified payment, or `Pending -> Failed`. Neither
/// `Completed` nor `Failed` is ever left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatusType {
    /// The order has been created and is waiting for payment.
    Pending,
    /// A payment for the order has been verified.
    Completed,
    /// The order could not be paid for.
    Failed,
}

impl Display for OrderStatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatusType::Pending => write!(f, "pending"),
            OrderStatusType::Completed => write!(f, "completed"),
            OrderStatusType::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for OrderStatusType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            s => Err(ConversionError(format!("Invalid order status: {s}"))),
        }
    }
}

//--------------------------------------  TransactionStatusType  -------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatusType {
    Pending,
    Completed,
    Failed,
}

impl Display for TransactionStatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatusType::Pending => write!(f, "pending"),
            TransactionStatusType::Completed => write!(f, "completed"),
            TransactionStatusType::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for TransactionStatusType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            s => Err(ConversionError(format!("Invalid transaction status: {s}"))),
        }
    }
}

//--------------------------------------         User          ---------------------------------------------------------
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string. Never leaves the server.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub bio: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user with their password hash already computed, ready to be stored.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new<S: Into<String>>(username: S, email: S, password_hash: S) -> Self {
        Self { username: username.into(), email: email.into(), password_hash: password_hash.into() }
    }
}

/// The public projection of a user that is returned in follower and following lists.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub email: String,
}

//--------------------------------------        Follow         ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Follow {
    pub follower_id: i64,
    pub followed_id: i64,
    pub follow_date: DateTime<Utc>,
}

//--------------------------------------       Product         ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Rupees,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Rupees,
    pub stock: i64,
}

impl NewProduct {
    pub fn new<S: Into<String>>(name: S, price: Rupees) -> Self {
        Self { name: name.into(), description: String::default(), price, stock: 0 }
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }
}

//--------------------------------------        Order          ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub product_id: i64,
    pub user_id: i64,
    pub quantity: i64,
    /// Price x quantity at the time the order was created, in rupees. Never recalculated.
    pub amount: Rupees,
    pub currency: String,
    pub status: OrderStatusType,
    /// The id of the matching order on the payment gateway, once one has been created.
    pub gateway_order_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// The receipt string that ties a gateway order back to this order.
    pub fn receipt(&self) -> String {
        format!("order_rcptid_{}", self.id)
    }

    pub fn is_pending(&self) -> bool {
        self.status == OrderStatusType::Pending
    }
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub product_id: i64,
    pub user_id: i64,
    pub quantity: i64,
    pub amount: Rupees,
    pub currency: String,
}

impl NewOrder {
    pub fn new(product_id: i64, user_id: i64, quantity: i64, amount: Rupees) -> Self {
        Self { product_id, user_id, quantity, amount, currency: INR_CURRENCY_CODE.to_string() }
    }
}

//--------------------------------------     Transaction       ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub order_id: i64,
    pub gateway_payment_id: String,
    pub gateway_order_id: String,
    pub status: TransactionStatusType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A verified payment, about to be recorded against `order_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub order_id: i64,
    pub gateway_payment_id: String,
    pub gateway_order_id: String,
}

impl NewTransaction {
    pub fn new<S: Into<String>>(order_id: i64, gateway_payment_id: S, gateway_order_id: S) -> Self {
        Self { order_id, gateway_payment_id: gateway_payment_id.into(), gateway_order_id: gateway_order_id.into() }
    }
}
