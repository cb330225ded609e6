/**
 * Database Operations for Chat Messages
 *
 * Chat messages are append-only. A `seq` column (BIGSERIAL) records
 * persistence order; history replay and broadcast ordering are both defined
 * in terms of it, so replay is stable even when two messages share a
 * timestamp.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A persisted chat message
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatMessage {
    /// Unique message ID (UUID)
    pub id: Uuid,
    /// Client-asserted sender name (not identity-verified)
    pub username: String,
    /// Message body (non-empty)
    pub message: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Persist a chat message
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Client-asserted sender name
/// * `message` - Message body
///
/// # Returns
/// The persisted message, or error
pub async fn save_message(
    pool: &PgPool,
    username: &str,
    message: &str,
) -> Result<ChatMessage, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let saved = sqlx::query_as::<_, ChatMessage>(
        r#"
        INSERT INTO messages (id, username, message, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, username, message, created_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(message)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(saved)
}

/// Load the full message history in persistence order (oldest first)
pub async fn load_messages(pool: &PgPool) -> Result<Vec<ChatMessage>, sqlx::Error> {
    let messages = sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT id, username, message, created_at
        FROM messages
        ORDER BY seq ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(messages)
}
