use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use log::error;
use socify_engine::{helpers::ValidationErrors, OrderFlowError, ProductApiError, SocialApiError};
use thiserror::Error;

/// The message returned for any 5xx error when the handler has not supplied a more specific one. The underlying cause
/// is logged and never returned to the caller.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("Invalid server configuration. {0}")]
    ConfigurationError(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid request. {0}")]
    ValidationError(ValidationErrors),
    #[error("Could not read request body: {0}")]
    InvalidRequestBody(String),
    #[error("Could not read request path: {0}")]
    InvalidRequestPath(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NoRecordFound(String),
    #[error("{0}")]
    BackendError(String),
}

impl ServerError {
    /// Replaces the generic message on a backend error with `message`. Client errors are returned unchanged.
    pub fn or_internal(self, message: &str) -> Self {
        match self {
            Self::BackendError(_) => Self::BackendError(message.to_string()),
            e => e,
        }
    }

    fn backend(cause: &dyn std::fmt::Display) -> Self {
        error!("💻️ {cause}");
        Self::BackendError(INTERNAL_ERROR_MESSAGE.to_string())
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            Self::InvalidRequestPath(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::ValidationError(errors) => serde_json::json!({ "errors": errors.errors }),
            Self::InitializeError(_) | Self::ConfigurationError(_) | Self::IOError(_) => {
                serde_json::json!({ "error": INTERNAL_ERROR_MESSAGE })
            },
            _ => serde_json::json!({ "error": self.to_string() }),
        };
        HttpResponse::build(self.status_code()).insert_header(ContentType::json()).body(body.to_string())
    }
}

impl From<OrderFlowError> for ServerError {
    fn from(e: OrderFlowError) -> Self {
        match e {
            OrderFlowError::ValidationError(v) => Self::ValidationError(v),
            OrderFlowError::ProductNotFound(_) => Self::NoRecordFound("Product not found".into()),
            OrderFlowError::UserNotFound(_) => Self::NoRecordFound("User not found".into()),
            OrderFlowError::OrderNotFound(_) => Self::NoRecordFound("Order not found".into()),
            OrderFlowError::InvalidSignature => Self::BadRequest("Invalid signature".into()),
            OrderFlowError::GatewayOrderMismatch { .. } | OrderFlowError::OrderNotPending(_) => {
                Self::BadRequest(e.to_string())
            },
            OrderFlowError::GatewayError(_) | OrderFlowError::DatabaseError(_) | OrderFlowError::InternalError(_) => {
                Self::backend(&e)
            },
        }
    }
}

impl From<SocialApiError> for ServerError {
    fn from(e: SocialApiError) -> Self {
        match e {
            SocialApiError::ValidationError(v) => Self::ValidationError(v),
            SocialApiError::UserAlreadyExists | SocialApiError::UserNotFound(_) | SocialApiError::AlreadyFollowing => {
                Self::BadRequest(e.to_string())
            },
            SocialApiError::DatabaseError(_) | SocialApiError::InternalError(_) => Self::backend(&e),
        }
    }
}

impl From<ProductApiError> for ServerError {
    fn from(e: ProductApiError) -> Self {
        match e {
            ProductApiError::ValidationError(v) => Self::ValidationError(v),
            ProductApiError::ProductNotFound(_) => Self::NoRecordFound("Product not found".into()),
            ProductApiError::DatabaseError(_) => Self::backend(&e),
        }
    }
}
