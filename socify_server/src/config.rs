//! Server configuration.
//!
//! All values come from `SOCIFY_*` environment variables. The database URL and the Razorpay key pair are required;
//! everything else has a default.
use std::env;

use log::*;
use razorpay_tools::RazorpayConfig;
use socify_common::{helpers::parse_boolean_flag, Secret};

use crate::errors::ServerError;

const DEFAULT_SOCIFY_HOST: &str = "127.0.0.1";
const DEFAULT_SOCIFY_PORT: u16 = 3000;
const DEFAULT_MAX_DB_CONNECTIONS: u32 = 25;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_db_connections: u32,
    /// If true, the database schema is brought up to date before the server starts listening.
    pub run_migrations: bool,
    pub razorpay: RazorpayConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SOCIFY_HOST.to_string(),
            port: DEFAULT_SOCIFY_PORT,
            database_url: String::default(),
            max_db_connections: DEFAULT_MAX_DB_CONNECTIONS,
            run_migrations: true,
            razorpay: RazorpayConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn try_from_env() -> Result<Self, ServerError> {
        let host = env::var("SOCIFY_HOST").ok().unwrap_or_else(|| DEFAULT_SOCIFY_HOST.into());
        let port = parse_or_default("SOCIFY_PORT", DEFAULT_SOCIFY_PORT);
        let max_db_connections = parse_or_default("SOCIFY_MAX_DB_CONNECTIONS", DEFAULT_MAX_DB_CONNECTIONS);
        let database_url = required("SOCIFY_DATABASE_URL")?;
        let key_id = required("SOCIFY_RAZORPAY_KEY_ID")?;
        let key_secret = Secret::new(required("SOCIFY_RAZORPAY_KEY_SECRET")?);
        let mut razorpay = RazorpayConfig::new(&key_id, key_secret);
        if let Ok(url) = env::var("SOCIFY_RAZORPAY_API_URL") {
            razorpay = razorpay.with_api_url(&url);
        }
        let run_migrations = parse_boolean_flag(env::var("SOCIFY_RUN_MIGRATIONS").ok(), true);
        Ok(Self { host, port, database_url, max_db_connections, run_migrations, razorpay })
    }
}

fn required(name: &str) -> Result<String, ServerError> {
    match env::var(name) {
        Ok(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(ServerError::ConfigurationError(format!("{name} is not set"))),
    }
}

fn parse_or_default<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(s) => s.trim().parse::<T>().unwrap_or_else(|e| {
            error!("🪛️ {s} is not a valid value for {name}. {e} Using the default, {default}, instead.");
            default
        }),
        Err(_) => default,
    }
}
