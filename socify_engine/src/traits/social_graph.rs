use thiserror::Error;

use crate::db_types::{Follow, NewUser, User, UserSummary};

#[derive(Debug, Clone, Error)]
pub enum SocialGraphError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("A user with that username or email already exists")]
    UserAlreadyExists,
}

impl From<sqlx::Error> for SocialGraphError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => SocialGraphError::UserAlreadyExists,
            e => SocialGraphError::DatabaseError(e.to_string()),
        }
    }
}

/// The `SocialGraphManagement` trait defines behaviour for storing users and the follow relation between them.
///
/// The follow relation is a set of `(follower, followed)` pairs. Each pair is stored at most once, and a user can
/// never follow themselves.
#[allow(async_fn_in_trait)]
pub trait SocialGraphManagement {
    /// Stores a new user. If the username or email is already taken, [`SocialGraphError::UserAlreadyExists`] is
    /// returned.
    async fn insert_user(&self, user: NewUser) -> Result<User, SocialGraphError>;

    async fn fetch_user(&self, user_id: i64) -> Result<Option<User>, SocialGraphError>;

    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, SocialGraphError>;

    /// Fetches any user whose username matches `username` *or* whose email matches `email`.
    async fn fetch_user_by_username_or_email(&self, username: &str, email: &str)
        -> Result<Option<User>, SocialGraphError>;

    async fn fetch_users(&self) -> Result<Vec<User>, SocialGraphError>;

    /// Adds `follower_id -> followed_id` to the relation. Returns `false` if the pair was already present, in which
    /// case nothing changes.
    async fn insert_follow(&self, follower_id: i64, followed_id: i64) -> Result<bool, SocialGraphError>;

    /// Removes `follower_id -> followed_id` from the relation. Returns `false` if the pair was not present.
    async fn remove_follow(&self, follower_id: i64, followed_id: i64) -> Result<bool, SocialGraphError>;

    async fn fetch_follows(&self) -> Result<Vec<Follow>, SocialGraphError>;

    /// The users that follow `user_id`.
    async fn fetch_followers(&self, user_id: i64) -> Result<Vec<UserSummary>, SocialGraphError>;

    /// The users that `user_id` follows.
    async fn fetch_following(&self, user_id: i64) -> Result<Vec<UserSummary>, SocialGraphError>;
}
