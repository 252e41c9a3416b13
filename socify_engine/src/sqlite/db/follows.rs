use log::trace;
use sqlx::SqliteConnection;

use crate::{
    db_types::{Follow, UserSummary},
    traits::SocialGraphError,
};

/// Adds the pair to the follow relation. The primary key on `(follower_id, followed_id)` makes this idempotent, so
/// there is no read-then-write gap for concurrent callers to race through.
///
/// Returns `true` if a new row was written.
pub async fn insert_follow(
    follower_id: i64,
    followed_id: i64,
    conn: &mut SqliteConnection,
) -> Result<bool, SocialGraphError> {
    let result = sqlx::query(
        r#"
            INSERT INTO follows (follower_id, followed_id) VALUES ($1, $2)
            ON CONFLICT (follower_id, followed_id) DO NOTHING;
        "#,
    )
    .bind(follower_id)
    .bind(followed_id)
    .execute(conn)
    .await?;
    trace!("🗃️ insert_follow({follower_id} -> {followed_id}) affected {} rows", result.rows_affected());
    Ok(result.rows_affected() == 1)
}

/// Returns `true` if a row was removed.
pub async fn remove_follow(
    follower_id: i64,
    followed_id: i64,
    conn: &mut SqliteConnection,
) -> Result<bool, SocialGraphError> {
    let result = sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followed_id = $2")
        .bind(follower_id)
        .bind(followed_id)
        .execute(conn)
        .await?;
    trace!("🗃️ remove_follow({follower_id} -> {followed_id}) affected {} rows", result.rows_affected());
    Ok(result.rows_affected() == 1)
}

pub async fn fetch_follows(conn: &mut SqliteConnection) -> Result<Vec<Follow>, SocialGraphError> {
    let follows = sqlx::query_as::<_, Follow>(
        "SELECT follower_id, followed_id, follow_date FROM follows ORDER BY follow_date ASC, follower_id, followed_id",
    )
    .fetch_all(conn)
    .await?;
    Ok(follows)
}

pub async fn fetch_followers(user_id: i64, conn: &mut SqliteConnection) -> Result<Vec<UserSummary>, SocialGraphError> {
    let users = sqlx::query_as::<_, UserSummary>(
        r#"
            SELECT users.id, users.username, users.email
            FROM follows JOIN users ON users.id = follows.follower_id
            WHERE follows.followed_id = $1
            ORDER BY follows.follow_date ASC, users.id ASC;
        "#,
    )
    .bind(user_id)
    .fetch_all(conn)
    .await?;
    Ok(users)
}

pub async fn fetch_following(user_id: i64, conn: &mut SqliteConnection) -> Result<Vec<UserSummary>, SocialGraphError> {
    let users = sqlx::query_as::<_, UserSummary>(
        r#"
            SELECT users.id, users.username, users.email
            FROM follows JOIN users ON users.id = follows.followed_id
            WHERE follows.follower_id = $1
            ORDER BY follows.follow_date ASC, users.id ASC;
        "#,
    )
    .bind(user_id)
    .fetch_all(conn)
    .await?;
    Ok(users)
}
