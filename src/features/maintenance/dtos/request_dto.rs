use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::maintenance::dtos::AttachmentResponseDto;
use crate::features::maintenance::models::{
    MaintenanceRequest, RequestStatus, RequestUrgency, StatusFilter,
};
use crate::shared::validation::UNIT_NUMBER_REGEX;

/// Create request DTO.
///
/// Earlier client iterations disagreed on field names (`priority` vs
/// `urgency`); both spellings deserialize, `urgency` is canonical.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMaintenanceRequestDto {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, max = 100, message = "issue_type is required"))]
    pub issue_type: String,

    #[validate(length(min = 1, max = 5000, message = "description is required"))]
    pub description: String,

    #[validate(length(min = 1, max = 200, message = "location is required"))]
    pub location: String,

    #[validate(regex(path = *UNIT_NUMBER_REGEX, message = "unit_number is invalid"))]
    pub unit_number: String,

    #[validate(email(message = "contact_email must be a valid email address"))]
    pub contact_email: String,

    #[serde(alias = "priority")]
    pub urgency: RequestUrgency,
}

/// Status update DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRequestStatusDto {
    pub status: RequestStatus,
    /// Completion notes; stored with the request, frozen once resolved
    #[serde(default)]
    pub notes: Option<String>,
}

/// Query parameters for the request list
#[derive(Debug, Deserialize, IntoParams)]
pub struct RequestListQuery {
    /// "active" (pending + in progress, default) or "completed" (resolved)
    #[serde(default = "default_status_filter")]
    pub status: StatusFilter,
}

fn default_status_filter() -> StatusFilter {
    StatusFilter::Active
}

/// Response DTO for a maintenance request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceRequestResponseDto {
    pub id: Uuid,
    pub reference_number: String,
    pub title: String,
    pub issue_type: String,
    pub description: String,
    pub location: String,
    pub unit_number: String,
    pub contact_email: String,
    pub urgency: RequestUrgency,
    pub status: RequestStatus,
    #[schema(value_type = Option<f64>)]
    pub estimated_cost: Option<Decimal>,
    pub deadline: Option<NaiveDate>,
    pub completed_at: Option<DateTime<Utc>>,
    pub completion_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MaintenanceRequest> for MaintenanceRequestResponseDto {
    fn from(r: MaintenanceRequest) -> Self {
        Self {
            id: r.id,
            reference_number: r.reference_number,
            title: r.title,
            issue_type: r.issue_type,
            description: r.description,
            location: r.location,
            unit_number: r.unit_number,
            contact_email: r.contact_email,
            urgency: r.urgency,
            status: r.status,
            estimated_cost: r.estimated_cost,
            deadline: r.deadline,
            completed_at: r.completed_at,
            completion_notes: r.completion_notes,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Response DTO for a request with its attachments
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RequestDetailResponseDto {
    #[serde(flatten)]
    pub request: MaintenanceRequestResponseDto,
    pub attachments: Vec<AttachmentResponseDto>,
}

/// Per-status counts over a resident's full request set
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RequestCountsDto {
    pub pending: i64,
    pub in_progress: i64,
    pub resolved: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_accepts_priority_as_urgency_alias() {
        let json = r#"{
            "title": "Broken gate",
            "issue_type": "access",
            "description": "Garage gate stuck half open",
            "location": "Basement",
            "unit_number": "101",
            "contact_email": "owner@example.com",
            "priority": "high"
        }"#;
        let dto: CreateMaintenanceRequestDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.urgency, RequestUrgency::High);
    }

    #[test]
    fn create_dto_rejects_missing_required_field() {
        // unit_number omitted
        let json = r#"{
            "title": "Broken gate",
            "issue_type": "access",
            "description": "Garage gate stuck half open",
            "location": "Basement",
            "contact_email": "owner@example.com",
            "urgency": "low"
        }"#;
        assert!(serde_json::from_str::<CreateMaintenanceRequestDto>(json).is_err());
    }

    #[test]
    fn create_dto_validation_flags_bad_fields() {
        let dto = CreateMaintenanceRequestDto {
            title: String::new(),
            issue_type: "plumbing".to_string(),
            description: "desc".to_string(),
            location: "loc".to_string(),
            unit_number: "unit 101".to_string(),
            contact_email: "not-an-email".to_string(),
            urgency: RequestUrgency::Low,
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("unit_number"));
        assert!(fields.contains_key("contact_email"));
    }
}
