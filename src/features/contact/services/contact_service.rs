//! Contact Service - Simple message storage

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::contact::dtos::CreateContactMessageDto;
use crate::features::contact::models::ContactMessage;

/// Service for storing contact form messages
pub struct ContactService {
    pool: PgPool,
}

impl ContactService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a contact message - just data, no notification fan-out
    pub async fn create(&self, dto: &CreateContactMessageDto) -> Result<ContactMessage> {
        let message = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, unit_number, email, subject, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.unit_number)
        .bind(&dto.email)
        .bind(&dto.subject)
        .bind(&dto.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert contact message: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Contact message {} received from unit {}",
            message.id,
            message.unit_number
        );

        Ok(message)
    }

    /// List contact messages, newest first
    pub async fn list(&self) -> Result<Vec<ContactMessage>> {
        sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list contact messages: {:?}", e);
            AppError::Database(e)
        })
    }
}
