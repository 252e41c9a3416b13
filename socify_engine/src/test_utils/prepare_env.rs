//! Throwaway SQLite databases for tests. Every helper here panics on failure, since there is no sensible way for a
//! test to continue without its database.
use std::env;

use log::*;
use sqlx::{migrate::MigrateDatabase, Sqlite};

use crate::SqliteDatabase;

/// Creates a fresh, fully migrated database at `url`. Any database already at that location is dropped first.
pub async fn prepare_test_env(url: &str) {
    dotenvy::from_filename(".env.test").ok();
    let _ = env_logger::try_init();
    create_database(url).await;
    run_migrations(url).await;
}

/// A unique `sqlite://` URL in the system temp directory.
pub fn random_db_path() -> String {
    let file = env::temp_dir().join(format!("socify_test_{:016x}.db", rand::random::<u64>()));
    format!("sqlite://{}", file.display())
}

pub async fn run_migrations(url: &str) {
    let db = SqliteDatabase::new_with_url(url, 1).await.expect("Could not open the test database");
    db.run_migrations().await.expect("Could not migrate the test database");
    db.close().await;
}

pub async fn create_database(url: &str) {
    if Sqlite::database_exists(url).await.unwrap_or(false) {
        drop_database(url).await;
    }
    Sqlite::create_database(url).await.expect("Could not create the test database");
    debug!("🚀️ Test database ready at {url}");
}

pub async fn drop_database(url: &str) {
    if let Err(e) = Sqlite::drop_database(url).await {
        warn!("🚀️ Could not drop test database {url}. {e}");
    }
}
