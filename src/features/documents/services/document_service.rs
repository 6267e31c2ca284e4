use std::sync::Arc;

use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::documents::dtos::{DocumentDownloadUrlDto, DocumentResponseDto};
use crate::features::documents::models::{Document, DocumentCategory};
use crate::modules::storage::BlobStore;

/// Service for the strata document repository
pub struct DocumentService {
    pool: PgPool,
    store: Arc<dyn BlobStore>,
    presigned_expiry_secs: u32,
}

impl DocumentService {
    pub fn new(pool: PgPool, store: Arc<dyn BlobStore>, presigned_expiry_secs: u32) -> Self {
        Self {
            pool,
            store,
            presigned_expiry_secs,
        }
    }

    /// Store a document blob and its metadata row
    pub async fn upload(
        &self,
        title: &str,
        category: DocumentCategory,
        file_name: &str,
        content_type: &str,
        data: Vec<u8>,
        uploaded_by: &str,
    ) -> Result<DocumentResponseDto> {
        let extension = file_name.rsplit('.').next().unwrap_or("bin");
        let file_key = format!("documents/{}/{}.{}", category, Uuid::new_v4(), extension);
        let file_size = data.len() as i64;

        self.store.upload(&file_key, data, content_type).await?;
        debug!("Document uploaded to storage: {}", file_key);

        let document = sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents (title, category, file_key, content_type, file_size, uploaded_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(category)
        .bind(&file_key)
        .bind(content_type)
        .bind(file_size)
        .bind(uploaded_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert document: {:?}", e);
            AppError::Database(e)
        })?;

        info!(
            "Document '{}' ({}) uploaded by {}",
            document.title, document.category, uploaded_by
        );

        Ok(document.into())
    }

    /// List documents, optionally restricted to one category, newest first
    pub async fn list(&self, category: Option<DocumentCategory>) -> Result<Vec<Document>> {
        let documents = match category {
            Some(category) => {
                sqlx::query_as::<_, Document>(
                    "SELECT * FROM documents WHERE category = $1 ORDER BY created_at DESC",
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Document>("SELECT * FROM documents ORDER BY created_at DESC")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to list documents: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(documents)
    }

    /// Produce a short-lived signed download URL for a document
    pub async fn download_url(&self, id: Uuid) -> Result<DocumentDownloadUrlDto> {
        let file_key: Option<String> =
            sqlx::query_scalar("SELECT file_key FROM documents WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let file_key =
            file_key.ok_or_else(|| AppError::NotFound(format!("Document {} not found", id)))?;

        let url = self.store.presigned_url(&file_key).await?;
        Ok(DocumentDownloadUrlDto {
            url,
            expires_in_secs: self.presigned_expiry_secs,
        })
    }
}
