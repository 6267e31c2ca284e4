use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::contact::models::ContactMessage;
use crate::shared::validation::UNIT_NUMBER_REGEX;

/// Create DTO for a contact form message
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateContactMessageDto {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,

    #[validate(regex(path = *UNIT_NUMBER_REGEX, message = "unit_number is invalid"))]
    pub unit_number: String,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 200, message = "subject is required"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000, message = "message is required"))]
    pub message: String,
}

/// Response DTO for a contact form message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactMessageResponseDto {
    pub id: Uuid,
    pub name: String,
    pub unit_number: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactMessageResponseDto {
    fn from(m: ContactMessage) -> Self {
        Self {
            id: m.id,
            name: m.name,
            unit_number: m.unit_number,
            email: m.email,
            subject: m.subject,
            message: m.message,
            created_at: m.created_at,
        }
    }
}
