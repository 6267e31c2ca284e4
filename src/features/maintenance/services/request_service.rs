use chrono::{Datelike, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::maintenance::dtos::{
    CreateMaintenanceRequestDto, RequestCountsDto, UpdateRequestStatusDto,
};
use crate::features::maintenance::models::{
    transition_fields, MaintenanceRequest, StatusFilter,
};

/// Format a human-facing reference number: MR-YYYY-NNNNNNN
fn format_reference_number(year: i32, seq: i64) -> String {
    format!("MR-{}-{:07}", year, seq)
}

/// Service for the maintenance request lifecycle
pub struct RequestService {
    pool: PgPool,
}

impl RequestService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Generate a reference number from the dedicated sequence
    async fn generate_reference_number(&self) -> Result<String> {
        let seq: Option<i64> =
            sqlx::query_scalar("SELECT nextval('maintenance_reference_seq')")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to get next sequence value: {:?}", e);
                    AppError::Database(e)
                })?;

        Ok(format_reference_number(
            Utc::now().year(),
            seq.unwrap_or(1),
        ))
    }

    /// Create a new request with status pending for the authenticated submitter
    pub async fn create(
        &self,
        dto: &CreateMaintenanceRequestDto,
        submitter: &str,
    ) -> Result<MaintenanceRequest> {
        let reference_number = self.generate_reference_number().await?;

        let request = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            INSERT INTO maintenance_requests
                (reference_number, title, issue_type, description, location,
                 unit_number, contact_email, urgency, requested_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&reference_number)
        .bind(&dto.title)
        .bind(&dto.issue_type)
        .bind(&dto.description)
        .bind(&dto.location)
        .bind(&dto.unit_number)
        .bind(&dto.contact_email)
        .bind(dto.urgency)
        .bind(submitter)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create maintenance request: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Created maintenance request {} (ref: {}) for {}",
            request.id,
            request.reference_number,
            submitter
        );

        Ok(request)
    }

    /// Get a request by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get maintenance request: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Maintenance request {} not found", id)))
    }

    /// Get a request visible to the given user: the submitter sees their own,
    /// committee-level roles see all. Others get NotFound rather than a
    /// confirmation that the id exists.
    pub async fn get_for_user(
        &self,
        id: Uuid,
        user: &AuthenticatedUser,
    ) -> Result<MaintenanceRequest> {
        let request = self.get_by_id(id).await?;
        if request.requested_by != user.sub && !user.has_committee_access() {
            return Err(AppError::NotFound(format!(
                "Maintenance request {} not found",
                id
            )));
        }
        Ok(request)
    }

    /// List a submitter's requests filtered to active or completed,
    /// newest first
    pub async fn list_by_user(
        &self,
        user_id: &str,
        filter: StatusFilter,
    ) -> Result<Vec<MaintenanceRequest>> {
        let query = match filter {
            StatusFilter::Active => {
                r#"
                SELECT * FROM maintenance_requests
                WHERE requested_by = $1 AND status IN ('pending', 'in_progress')
                ORDER BY created_at DESC
                "#
            }
            StatusFilter::Completed => {
                r#"
                SELECT * FROM maintenance_requests
                WHERE requested_by = $1 AND status = 'resolved'
                ORDER BY created_at DESC
                "#
            }
        };

        sqlx::query_as::<_, MaintenanceRequest>(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list maintenance requests: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Per-status counts over the submitter's full request set
    pub async fn counts_by_user(&self, user_id: &str) -> Result<RequestCountsDto> {
        let (pending, in_progress, resolved): (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE status = 'pending'),
                COUNT(*) FILTER (WHERE status = 'in_progress'),
                COUNT(*) FILTER (WHERE status = 'resolved')
            FROM maintenance_requests
            WHERE requested_by = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count maintenance requests: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(RequestCountsDto {
            pending,
            in_progress,
            resolved,
        })
    }

    /// Update a request's status.
    ///
    /// Resolving sets completed_at and freezes the notes atomically with the
    /// status change; moving away from resolved is refused. Conflicting
    /// concurrent updates are settled by the database (last write wins).
    pub async fn update_status(
        &self,
        id: Uuid,
        dto: &UpdateRequestStatusDto,
        user: &AuthenticatedUser,
    ) -> Result<MaintenanceRequest> {
        let current = self.get_for_user(id, user).await?;

        if !current.status.can_transition_to(dto.status) {
            return Err(AppError::InvalidTransition(format!(
                "Cannot move request {} from {} to {}",
                current.reference_number, current.status, dto.status
            )));
        }

        let (completed_at, completion_notes) =
            transition_fields(&current, dto.status, dto.notes.as_deref(), Utc::now());

        let request = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            UPDATE maintenance_requests
            SET status = $2, completed_at = $3, completion_notes = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.status)
        .bind(completed_at)
        .bind(&completion_notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update request status: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Maintenance request {} not found", id)))?;

        if current.status != request.status {
            tracing::info!(
                "Request {} moved from {} to {}",
                request.reference_number,
                current.status,
                request.status
            );
        }

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_number_format() {
        assert_eq!(format_reference_number(2025, 42), "MR-2025-0000042");
        assert_eq!(format_reference_number(2026, 1234567), "MR-2026-1234567");
    }
}
