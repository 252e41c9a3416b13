//! Socify Engine
//!
//! The Socify engine contains the core logic of the Socify backend: order intake, payment verification, the product
//! catalogue and the social graph. It is independent of any HTTP framework and of any particular payment gateway.
//!
//! The library is divided into two main sections:
//! 1. Storage. The backend contracts are defined in [`mod@traits`] and the data types in [`mod@db_types`].
//!    [`SqliteDatabase`] is the SQLite implementation of the storage traits. You should never need to access the
//!    database directly. Instead, use the public API.
//! 2. The public API ([`OrderFlowApi`], [`SocialApi`] and [`ProductApi`]). Each API is generic over the backend
//!    traits it needs, so it can be tested against mocks.
//!
//! The payment gateway is also a collaborator behind a trait ([`traits::PaymentGateway`]). The engine never talks to a
//! specific gateway itself.
#[cfg(feature = "sqlite")]
mod sqlite;

mod api;
pub mod db_types;
pub mod helpers;
pub mod traits;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

pub use api::{
    errors::{OrderFlowError, ProductApiError, SocialApiError},
    order_flow_api::OrderFlowApi,
    order_objects,
    product_api::{NewProductRequest, ProductApi},
    social_api::SocialApi,
    user_objects,
};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;
