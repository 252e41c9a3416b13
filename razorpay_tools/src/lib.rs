//! A minimal client for the Razorpay REST API.
//!
//! Only the pieces the Socify backend needs are covered: creating remote orders so that a customer can be handed off to
//! the Razorpay checkout. Payment signature verification does not need the API at all and lives in the payment engine.
mod api;
mod config;
mod error;

mod data_objects;

pub use api::RazorpayApi;
pub use config::RazorpayConfig;
pub use data_objects::{NewRazorpayOrder, RazorpayOrder};
pub use error::RazorpayApiError;
