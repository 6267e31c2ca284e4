use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Occupancy type enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "occupancy_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OccupancyType {
    OwnerOccupied,
    Tenanted,
}

/// Database model for a strata roll entry
#[derive(Debug, Clone, FromRow)]
pub struct UnitEntry {
    pub id: Uuid,
    pub unit_number: String,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone: String,
    pub entitlement: Decimal,
    pub occupancy: OccupancyType,
    pub updated_at: DateTime<Utc>,
}
