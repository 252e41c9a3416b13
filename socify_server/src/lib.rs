//! # Socify server
//! This crate hosts the HTTP server for the Socify backend. It is responsible for:
//! * Parsing JSON request bodies and dispatching them to the Socify engine APIs.
//! * Mapping engine errors onto HTTP status codes and JSON error bodies.
//! * Wiring up the SQLite ledger store and the Razorpay client at startup.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! * `/` and `/health`: liveness checks.
//! * `/api/user/*`: user accounts and the follow graph.
//! * `/api/product/*`: the product catalogue.
//! * `/api/payment/*`: order intake and payment verification.
pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod integrations;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
