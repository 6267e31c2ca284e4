use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::roll::dtos::RollSummaryDto;
use crate::features::roll::models::{OccupancyType, UnitEntry};

/// Service for the unit ownership roll
pub struct RollService {
    pool: PgPool,
}

impl RollService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List roll entries matching an optional search term (unit number or
    /// owner name) and occupancy filter, ordered by unit number
    pub async fn list(
        &self,
        search: Option<&str>,
        occupancy: Option<OccupancyType>,
    ) -> Result<Vec<UnitEntry>> {
        // Escape LIKE wildcards in the user-supplied term
        let pattern = search.map(|s| {
            format!(
                "%{}%",
                s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
            )
        });

        let units = match (&pattern, occupancy) {
            (Some(pattern), Some(occupancy)) => {
                sqlx::query_as::<_, UnitEntry>(
                    r#"
                    SELECT * FROM units
                    WHERE (unit_number ILIKE $1 OR owner_name ILIKE $1) AND occupancy = $2
                    ORDER BY unit_number ASC
                    "#,
                )
                .bind(pattern)
                .bind(occupancy)
                .fetch_all(&self.pool)
                .await
            }
            (Some(pattern), None) => {
                sqlx::query_as::<_, UnitEntry>(
                    r#"
                    SELECT * FROM units
                    WHERE unit_number ILIKE $1 OR owner_name ILIKE $1
                    ORDER BY unit_number ASC
                    "#,
                )
                .bind(pattern)
                .fetch_all(&self.pool)
                .await
            }
            (None, Some(occupancy)) => {
                sqlx::query_as::<_, UnitEntry>(
                    "SELECT * FROM units WHERE occupancy = $1 ORDER BY unit_number ASC",
                )
                .bind(occupancy)
                .fetch_all(&self.pool)
                .await
            }
            (None, None) => {
                sqlx::query_as::<_, UnitEntry>("SELECT * FROM units ORDER BY unit_number ASC")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to list strata roll: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(units)
    }

    /// Summary over the full roll: unit counts per occupancy and the
    /// entitlement total
    pub async fn summary(&self) -> Result<RollSummaryDto> {
        let (total_units, owner_occupied, tenanted, total_entitlements): (
            i64,
            i64,
            i64,
            Option<Decimal>,
        ) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE occupancy = 'owner_occupied'),
                COUNT(*) FILTER (WHERE occupancy = 'tenanted'),
                SUM(entitlement)
            FROM units
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to summarize strata roll: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(RollSummaryDto {
            total_units,
            owner_occupied,
            tenanted,
            total_entitlements: total_entitlements.unwrap_or_default(),
        })
    }
}
