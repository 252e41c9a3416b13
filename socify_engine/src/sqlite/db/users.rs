use sqlx::SqliteConnection;

use crate::{
    db_types::{NewUser, User},
    traits::SocialGraphError,
};

pub async fn insert_user(user: NewUser, conn: &mut SqliteConnection) -> Result<User, SocialGraphError> {
    let user = sqlx::query_as::<_, User>(
        r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password_hash, bio, avatar, created_at, updated_at;
        "#,
    )
    .bind(user.username)
    .bind(user.email)
    .bind(user.password_hash)
    .fetch_one(conn)
    .await?;
    Ok(user)
}

pub async fn fetch_user(user_id: i64, conn: &mut SqliteConnection) -> Result<Option<User>, SocialGraphError> {
    let user = sqlx::query_as::<_, User>(
        r#"
            SELECT id, username, email, password_hash, bio, avatar, created_at, updated_at
            FROM users
            WHERE id = $1;
        "#,
    )
    .bind(user_id)
    .fetch_optional(conn)
    .await?;
    Ok(user)
}

pub async fn fetch_user_by_email(email: &str, conn: &mut SqliteConnection) -> Result<Option<User>, SocialGraphError> {
    let user = sqlx::query_as::<_, User>(
        r#"
            SELECT id, username, email, password_hash, bio, avatar, created_at, updated_at
            FROM users
            WHERE email = $1;
        "#,
    )
    .bind(email)
    .fetch_optional(conn)
    .await?;
    Ok(user)
}

pub async fn fetch_user_by_username_or_email(
    username: &str,
    email: &str,
    conn: &mut SqliteConnection,
) -> Result<Option<User>, SocialGraphError> {
    let user = sqlx::query_as::<_, User>(
        r#"
            SELECT id, username, email, password_hash, bio, avatar, created_at, updated_at
            FROM users
            WHERE username = $1 OR email = $2
            LIMIT 1;
        "#,
    )
    .bind(username)
    .bind(email)
    .fetch_optional(conn)
    .await?;
    Ok(user)
}

pub async fn fetch_users(conn: &mut SqliteConnection) -> Result<Vec<User>, SocialGraphError> {
    let users = sqlx::query_as::<_, User>(
        r#"
            SELECT id, username, email, password_hash, bio, avatar, created_at, updated_at
            FROM users
            ORDER BY id ASC;
        "#,
    )
    .fetch_all(conn)
    .await?;
    Ok(users)
}
