//! #  Backend contracts.
//!
//! This module defines the interface contracts that the Socify engine needs from its collaborators.
//!
//! ## Storage
//! The ledger store is any backend that implements the storage traits. [`crate::SqliteDatabase`] is the only
//! implementation shipped with the engine, but the APIs only ever see the traits, so they can be tested against mocks.
//!
//! * [`OrderManagement`] stores orders and transactions and performs the atomic `pending -> completed` transition.
//! * [`ProductManagement`] stores the product catalogue.
//! * [`SocialGraphManagement`] stores users and the follow relation between them.
//!
//! ## Payment gateway
//! [`PaymentGateway`] is the remote payment processor. The engine only ever asks it to create orders; it never asks the
//! gateway to verify anything, since payment callbacks are verified locally with an HMAC signature.
mod order_management;
mod payment_gateway;
mod product_management;
mod social_graph;

mod data_objects;

pub use data_objects::{PaymentCompletion, UserProfile};
pub use order_management::{OrderManagement, OrderManagementError};
pub use payment_gateway::{GatewayOrder, GatewayOrderRequest, PaymentGateway, PaymentGatewayError};
pub use product_management::{ProductManagement, ProductManagementError};
pub use social_graph::{SocialGraphError, SocialGraphManagement};
