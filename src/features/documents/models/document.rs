use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Document category enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "document_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    Insurance,
    Rules,
    Minutes,
    Financial,
    Other,
}

impl std::fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentCategory::Insurance => write!(f, "insurance"),
            DocumentCategory::Rules => write!(f, "rules"),
            DocumentCategory::Minutes => write!(f, "minutes"),
            DocumentCategory::Financial => write!(f, "financial"),
            DocumentCategory::Other => write!(f, "other"),
        }
    }
}

/// Database model for a strata document
#[derive(Debug, Clone, FromRow)]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    pub category: DocumentCategory,
    pub file_key: String,
    pub content_type: String,
    pub file_size: i64,
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
}
