use thiserror::Error;

use crate::{
    helpers::{PasswordError, ValidationErrors},
    traits::{OrderManagementError, PaymentGatewayError, ProductManagementError, SocialGraphError},
};

#[derive(Debug, Clone, Error)]
pub enum OrderFlowError {
    #[error("Invalid request. {0}")]
    ValidationError(ValidationErrors),
    #[error("Product {0} not found")]
    ProductNotFound(i64),
    #[error("User {0} not found")]
    UserNotFound(i64),
    #[error("Order {0} not found")]
    OrderNotFound(i64),
    #[error("Invalid signature")]
    InvalidSignature,
    #[error("Order {order_id} belongs to gateway order {expected}, not {received}")]
    GatewayOrderMismatch { order_id: i64, expected: String, received: String },
    #[error("Order {0} is no longer pending")]
    OrderNotPending(i64),
    #[error("Payment gateway error: {0}")]
    GatewayError(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<ValidationErrors> for OrderFlowError {
    fn from(e: ValidationErrors) -> Self {
        Self::ValidationError(e)
    }
}

impl From<OrderManagementError> for OrderFlowError {
    fn from(e: OrderManagementError) -> Self {
        match e {
            OrderManagementError::DatabaseError(s) => Self::DatabaseError(s),
            OrderManagementError::OrderNotFound(id) => Self::OrderNotFound(id),
            OrderManagementError::OrderNotPending(id) => Self::OrderNotPending(id),
        }
    }
}

impl From<ProductManagementError> for OrderFlowError {
    fn from(e: ProductManagementError) -> Self {
        match e {
            ProductManagementError::DatabaseError(s) => Self::DatabaseError(s),
        }
    }
}

impl From<SocialGraphError> for OrderFlowError {
    fn from(e: SocialGraphError) -> Self {
        Self::DatabaseError(e.to_string())
    }
}

impl From<PaymentGatewayError> for OrderFlowError {
    fn from(e: PaymentGatewayError) -> Self {
        Self::GatewayError(e.to_string())
    }
}

#[derive(Debug, Clone, Error)]
pub enum SocialApiError {
    #[error("Invalid request. {0}")]
    ValidationError(ValidationErrors),
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound(String),
    #[error("Already following this user")]
    AlreadyFollowing,
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<ValidationErrors> for SocialApiError {
    fn from(e: ValidationErrors) -> Self {
        Self::ValidationError(e)
    }
}

impl From<SocialGraphError> for SocialApiError {
    fn from(e: SocialGraphError) -> Self {
        match e {
            SocialGraphError::DatabaseError(s) => Self::DatabaseError(s),
            SocialGraphError::UserAlreadyExists => Self::UserAlreadyExists,
        }
    }
}

impl From<PasswordError> for SocialApiError {
    fn from(e: PasswordError) -> Self {
        Self::InternalError(e.to_string())
    }
}

#[derive(Debug, Clone, Error)]
pub enum ProductApiError {
    #[error("Invalid request. {0}")]
    ValidationError(ValidationErrors),
    #[error("Product {0} not found")]
    ProductNotFound(i64),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<ValidationErrors> for ProductApiError {
    fn from(e: ValidationErrors) -> Self {
        Self::ValidationError(e)
    }
}

impl From<ProductManagementError> for ProductApiError {
    fn from(e: ProductManagementError) -> Self {
        match e {
            ProductManagementError::DatabaseError(s) => Self::DatabaseError(s),
        }
    }
}
