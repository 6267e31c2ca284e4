use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::committee::models::CommitteeMember;

/// Response DTO for a committee member
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommitteeMemberResponseDto {
    pub id: Uuid,
    pub role: String,
    pub name: String,
    pub email: String,
    pub responsibilities: String,
}

impl From<CommitteeMember> for CommitteeMemberResponseDto {
    fn from(m: CommitteeMember) -> Self {
        Self {
            id: m.id,
            role: m.role,
            name: m.name,
            email: m.email,
            responsibilities: m.responsibilities,
        }
    }
}
