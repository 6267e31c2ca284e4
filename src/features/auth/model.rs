use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{ROLE_BUILDING_MANAGER, ROLE_COMMITTEE, ROLE_RESIDENT};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Check if user has a specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Check if user is a building manager
    pub fn is_building_manager(&self) -> bool {
        self.has_role(ROLE_BUILDING_MANAGER)
    }

    /// Check if user is a committee member
    pub fn is_committee(&self) -> bool {
        self.has_role(ROLE_COMMITTEE)
    }

    /// Check if user is a resident
    #[allow(dead_code)]
    pub fn is_resident(&self) -> bool {
        self.has_role(ROLE_RESIDENT)
    }

    /// Check if user has committee-level access (committee or building manager)
    pub fn has_committee_access(&self) -> bool {
        self.is_committee() || self.is_building_manager()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "user-1".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn committee_access_covers_committee_and_manager() {
        assert!(user(&["committee"]).has_committee_access());
        assert!(user(&["building_manager"]).has_committee_access());
        assert!(!user(&["resident"]).has_committee_access());
        assert!(!user(&[]).has_committee_access());
    }
}
