/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Resident role - can submit and track maintenance requests
pub const ROLE_RESIDENT: &str = "resident";

/// Committee role - can manage requests, documents and view the strata roll
pub const ROLE_COMMITTEE: &str = "committee";

/// Building manager role - full administrative access
pub const ROLE_BUILDING_MANAGER: &str = "building_manager";
