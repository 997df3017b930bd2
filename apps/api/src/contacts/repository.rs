use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::contact::{ContactMessage, NewContact};

/// Most recent submissions returned by the admin listing.
pub const ADMIN_LIST_LIMIT: i64 = 100;

pub async fn insert_contact(pool: &PgPool, contact: &NewContact) -> Result<ContactMessage, AppError> {
    Ok(sqlx::query_as::<_, ContactMessage>(
        r#"
        INSERT INTO contacts (name, email, message)
        VALUES ($1, $2, $3)
        RETURNING id, name, email, message, status, created_at
        "#,
    )
    .bind(&contact.name)
    .bind(&contact.email)
    .bind(&contact.message)
    .fetch_one(pool)
    .await?)
}

/// Newest first.
pub async fn recent_contacts(pool: &PgPool, limit: i64) -> Result<Vec<ContactMessage>, AppError> {
    Ok(sqlx::query_as::<_, ContactMessage>(
        r#"
        SELECT id, name, email, message, status, created_at
        FROM contacts
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?)
}
