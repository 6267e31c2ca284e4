use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::roll::models::{OccupancyType, UnitEntry};

/// Query parameters for the strata roll listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct RollListQuery {
    /// Substring match on unit number or owner name
    pub search: Option<String>,
    /// Restrict to owner-occupied or tenanted units
    pub occupancy: Option<OccupancyType>,
}

/// Response DTO for a strata roll entry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UnitResponseDto {
    pub id: Uuid,
    pub unit_number: String,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone: String,
    #[schema(value_type = f64)]
    pub entitlement: Decimal,
    pub occupancy: OccupancyType,
    pub updated_at: DateTime<Utc>,
}

impl From<UnitEntry> for UnitResponseDto {
    fn from(u: UnitEntry) -> Self {
        Self {
            id: u.id,
            unit_number: u.unit_number,
            owner_name: u.owner_name,
            owner_email: u.owner_email,
            owner_phone: u.owner_phone,
            entitlement: u.entitlement,
            occupancy: u.occupancy,
            updated_at: u.updated_at,
        }
    }
}

/// Summary cards over the whole roll
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RollSummaryDto {
    pub total_units: i64,
    pub owner_occupied: i64,
    pub tenanted: i64,
    /// Sum of unit entitlements, in percent
    #[schema(value_type = f64)]
    pub total_entitlements: Decimal,
}
