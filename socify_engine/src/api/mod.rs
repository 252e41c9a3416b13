//! # Socify engine public API
//!
//! The `api` module exposes the programmatic API for the Socify engine. The API is modular, so that clients can pick
//! the functionality they want.
//!
//! * [`order_flow_api`] is the primary API. It handles order intake, and the verification of payment callbacks from
//!   the payment gateway.
//! * [`social_api`] manages users and the follow relation between them.
//! * [`product_api`] manages the product catalogue that orders are placed against.
//!
//! # API usage
//!
//! An API instance is created by supplying a database backend that implements the backend traits the API requires.
//!
//! ```rust,ignore
//! use socify_engine::{SocialApi, SqliteDatabase};
//! let db = SqliteDatabase::new_with_url("sqlite://data/socify.db", 25).await?;
//! // SqliteDatabase implements SocialGraphManagement
//! let api = SocialApi::new(db);
//! let followers = api.followers("a@x.com").await?;
//! ```
pub mod errors;
pub mod order_flow_api;
pub mod order_objects;
pub mod product_api;
pub mod social_api;
pub mod user_objects;
