//! # Table-level SQLite access
//!
//! One module per table. Every function takes a `&mut SqliteConnection`, which may be a pooled connection or an open
//! transaction (`&mut tx`), so the same calls compose into atomic units without changes.
use std::env;

use log::{debug, info};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

pub mod follows;
pub mod orders;
pub mod products;
pub mod transactions;
pub mod users;

const DEFAULT_DATABASE_URL: &str = "sqlite://data/socify.db";

/// The database location from `SOCIFY_DATABASE_URL`, falling back to a file in `./data`.
pub fn db_url() -> String {
    match env::var("SOCIFY_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            info!("🗃️ SOCIFY_DATABASE_URL is not set. Falling back to {DEFAULT_DATABASE_URL}");
            DEFAULT_DATABASE_URL.to_string()
        },
    }
}

pub async fn new_pool(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    debug!("🗃️ Connecting to {url}");
    SqlitePoolOptions::new().max_connections(max_connections).connect(url).await
}
