use serde::{Deserialize, Serialize};

use crate::helpers::{is_valid_email, normalize_email, ValidationErrors};

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// An [`AddUserRequest`] that has passed validation. The username is trimmed and the email normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl AddUserRequest {
    pub fn new<S: Into<String>>(username: S, email: S, password: S) -> Self {
        Self { username: Some(username.into()), email: Some(email.into()), password: Some(password.into()) }
    }

    pub fn validate(&self) -> Result<ValidUser, ValidationErrors> {
        let username = self.username.as_deref().unwrap_or_default().trim().to_string();
        let email = normalize_email(self.email.as_deref().unwrap_or_default());
        let password = self.password.clone().unwrap_or_default();
        let mut errors = ValidationErrors::new();
        errors.check(
            username.chars().count() >= MIN_USERNAME_LENGTH,
            "username",
            "Username must be at least 3 characters long",
        );
        errors.check(is_valid_email(&email), "email", "Invalid email");
        errors.check(
            password.chars().count() >= MIN_PASSWORD_LENGTH,
            "password",
            "Password must be at least 6 characters long",
        );
        errors.into_result()?;
        Ok(ValidUser { username, email, password })
    }
}

/// The body of a follow or unfollow request. The user being followed is named in the path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FollowRequest {
    #[serde(rename = "followerEmail")]
    pub follower_email: Option<String>,
}

impl FollowRequest {
    pub fn new<S: Into<String>>(follower_email: S) -> Self {
        Self { follower_email: Some(follower_email.into()) }
    }
}
