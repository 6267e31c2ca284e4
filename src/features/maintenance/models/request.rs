use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request status enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "request_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    InProgress,
    Resolved,
}

impl RequestStatus {
    /// A request may move freely between the open statuses; once resolved it
    /// stays resolved (setting resolved again is an idempotent no-op).
    pub fn can_transition_to(self, next: RequestStatus) -> bool {
        match self {
            RequestStatus::Resolved => next == RequestStatus::Resolved,
            _ => true,
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::InProgress => write!(f, "in_progress"),
            RequestStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// Request urgency enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "request_urgency", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequestUrgency {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for RequestUrgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestUrgency::Low => write!(f, "low"),
            RequestUrgency::Medium => write!(f, "medium"),
            RequestUrgency::High => write!(f, "high"),
            RequestUrgency::Critical => write!(f, "critical"),
        }
    }
}

/// List filter over the open/closed split of a resident's requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    Active,
    Completed,
}

impl StatusFilter {
    #[allow(dead_code)]
    pub fn matches(self, status: RequestStatus) -> bool {
        match self {
            StatusFilter::Active => {
                status == RequestStatus::Pending || status == RequestStatus::InProgress
            }
            StatusFilter::Completed => status == RequestStatus::Resolved,
        }
    }
}

/// Database model for a maintenance request
#[derive(Debug, Clone, FromRow)]
pub struct MaintenanceRequest {
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
    pub requested_by: String,
    pub estimated_cost: Option<Decimal>,
    pub deadline: Option<NaiveDate>,
    pub completed_at: Option<DateTime<Utc>>,
    pub completion_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compute the `completed_at` and `completion_notes` values a status change
/// must persist, keeping the invariant that `completed_at` is set exactly
/// while the request is resolved and notes freeze at the moment of
/// resolution.
pub fn transition_fields(
    current: &MaintenanceRequest,
    new_status: RequestStatus,
    notes: Option<&str>,
    now: DateTime<Utc>,
) -> (Option<DateTime<Utc>>, Option<String>) {
    match new_status {
        RequestStatus::Resolved if current.status == RequestStatus::Resolved => {
            // Idempotent re-resolution keeps the original record
            (current.completed_at, current.completion_notes.clone())
        }
        RequestStatus::Resolved => (
            Some(now),
            notes
                .map(str::to_string)
                .or_else(|| current.completion_notes.clone()),
        ),
        // Notes stay editable while the request is open; completed_at stays unset
        _ => (
            None,
            notes
                .map(str::to_string)
                .or_else(|| current.completion_notes.clone()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(status: RequestStatus, completed_at: Option<DateTime<Utc>>) -> MaintenanceRequest {
        MaintenanceRequest {
            id: Uuid::new_v4(),
            reference_number: "MR-2025-0000001".to_string(),
            title: "Leaking tap".to_string(),
            issue_type: "plumbing".to_string(),
            description: "Kitchen tap drips constantly".to_string(),
            location: "Unit 101".to_string(),
            unit_number: "101".to_string(),
            contact_email: "resident@example.com".to_string(),
            urgency: RequestUrgency::Low,
            status,
            requested_by: "user-1".to_string(),
            estimated_cost: None,
            deadline: None,
            completed_at,
            completion_notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn open_statuses_transition_freely() {
        assert!(RequestStatus::Pending.can_transition_to(RequestStatus::InProgress));
        assert!(RequestStatus::Pending.can_transition_to(RequestStatus::Resolved));
        assert!(RequestStatus::InProgress.can_transition_to(RequestStatus::Resolved));
        assert!(RequestStatus::InProgress.can_transition_to(RequestStatus::Pending));
        assert!(RequestStatus::InProgress.can_transition_to(RequestStatus::InProgress));
    }

    #[test]
    fn resolved_is_terminal_except_for_itself() {
        assert!(!RequestStatus::Resolved.can_transition_to(RequestStatus::Pending));
        assert!(!RequestStatus::Resolved.can_transition_to(RequestStatus::InProgress));
        assert!(RequestStatus::Resolved.can_transition_to(RequestStatus::Resolved));
    }

    #[test]
    fn resolving_sets_completed_at_and_notes() {
        let req = request(RequestStatus::InProgress, None);
        let now = Utc::now();
        let (completed_at, notes) =
            transition_fields(&req, RequestStatus::Resolved, Some("Replaced washer"), now);
        assert_eq!(completed_at, Some(now));
        assert_eq!(notes.as_deref(), Some("Replaced washer"));
        assert!(completed_at.unwrap() >= req.created_at);
    }

    #[test]
    fn re_resolving_preserves_original_resolution() {
        let first = Utc::now();
        let mut req = request(RequestStatus::Resolved, Some(first));
        req.completion_notes = Some("Original notes".to_string());

        let later = first + chrono::Duration::hours(1);
        let (completed_at, notes) =
            transition_fields(&req, RequestStatus::Resolved, Some("Rewrite attempt"), later);
        assert_eq!(completed_at, Some(first));
        assert_eq!(notes.as_deref(), Some("Original notes"));
    }

    #[test]
    fn notes_are_editable_while_open_without_setting_completed_at() {
        let now = Utc::now();
        let req = request(RequestStatus::Pending, None);
        let (completed_at, notes) =
            transition_fields(&req, RequestStatus::InProgress, Some("Plumber booked"), now);
        assert_eq!(completed_at, None);
        assert_eq!(notes.as_deref(), Some("Plumber booked"));
    }

    #[test]
    fn repeated_in_progress_does_not_touch_completed_at() {
        let now = Utc::now();
        let req = request(RequestStatus::InProgress, None);
        let (completed_at, _) = transition_fields(&req, RequestStatus::InProgress, None, now);
        assert_eq!(completed_at, None);
    }

    #[test]
    fn completed_at_invariant_holds_across_random_transition_sequences() {
        // Walk a deterministic pseudo-random sequence of transitions and
        // check the invariant after every accepted step: completed_at is
        // non-null exactly when status is resolved.
        let all = [
            RequestStatus::Pending,
            RequestStatus::InProgress,
            RequestStatus::Resolved,
        ];
        let mut seed: u64 = 0x5eed;
        let mut req = request(RequestStatus::Pending, None);

        for _ in 0..200 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let next = all[(seed >> 33) as usize % all.len()];

            if !req.status.can_transition_to(next) {
                continue;
            }
            let (completed_at, notes) = transition_fields(&req, next, None, Utc::now());
            req.status = next;
            req.completed_at = completed_at;
            req.completion_notes = notes;

            assert_eq!(
                req.completed_at.is_some(),
                req.status == RequestStatus::Resolved
            );
        }
    }

    #[test]
    fn status_filter_partitions_statuses() {
        assert!(StatusFilter::Active.matches(RequestStatus::Pending));
        assert!(StatusFilter::Active.matches(RequestStatus::InProgress));
        assert!(!StatusFilter::Active.matches(RequestStatus::Resolved));
        assert!(StatusFilter::Completed.matches(RequestStatus::Resolved));
        assert!(!StatusFilter::Completed.matches(RequestStatus::Pending));
    }
}
