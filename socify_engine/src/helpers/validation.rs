//! Request field validation.
//!
//! Validation failures are collected per field rather than stopping at the first one, so that a client gets every
//! problem with its request in one response.
use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new<S1: Into<String>, S2: Into<String>>(field: S1, message: S2) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single<S1: Into<String>, S2: Into<String>>(field: S1, message: S2) -> Self {
        Self { errors: vec![FieldError::new(field, message)] }
    }

    pub fn add<S1: Into<String>, S2: Into<String>>(&mut self, field: S1, message: S2) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Adds `message` against `field` if `ok` is false.
    pub fn check<S1: Into<String>, S2: Into<String>>(&mut self, ok: bool, field: S1, message: S2) {
        if !ok {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(())` if nothing was recorded, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msgs = self.errors.iter().map(|e| format!("{}: {}", e.field, e.message)).collect::<Vec<_>>();
        write!(f, "{}", msgs.join("; "))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

/// Trims and lower-cases an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
