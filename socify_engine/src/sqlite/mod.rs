//! SQLite database module for the Socify engine.
mod sqlite_impl;

pub mod db;
pub use sqlite_impl::SqliteDatabase;
