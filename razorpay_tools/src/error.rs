use thiserror::Error;

/// Everything that can go wrong while talking to the Razorpay Orders API.
#[derive(Debug, Error)]
pub enum RazorpayApiError {
    #[error("The Razorpay client could not be built. {0}")]
    Initialization(String),
    /// The request never produced a usable HTTP response.
    #[error("No usable response from Razorpay. {0}")]
    RestResponseError(String),
    #[error("Razorpay sent a response that could not be decoded. {0}")]
    JsonError(String),
    /// Razorpay answered with a non-success status code.
    #[error("Razorpay returned HTTP {status}. {message}")]
    QueryError { status: u16, message: String },
    #[error("Razorpay cannot charge this amount. {0}")]
    InvalidAmount(String),
}
