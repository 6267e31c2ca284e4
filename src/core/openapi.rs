use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::budget::{dtos as budget_dtos, handlers as budget_handlers};
use crate::features::committee::{dtos as committee_dtos, handlers as committee_handlers};
use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::documents::{
    dtos as documents_dtos, handlers as documents_handlers, models as documents_models,
};
use crate::features::maintenance::{
    dtos as maintenance_dtos, handlers as maintenance_handlers, models as maintenance_models,
};
use crate::features::rate_limits::{dtos as rate_limits_dtos, handlers as rate_limits_handlers};
use crate::features::roll::{dtos as roll_dtos, handlers as roll_handlers, models as roll_models};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::get_me,
        auth::handlers::sign_out,
        // Maintenance
        maintenance_handlers::request_handler::create_request,
        maintenance_handlers::request_handler::list_requests,
        maintenance_handlers::request_handler::request_summary,
        maintenance_handlers::request_handler::get_request,
        maintenance_handlers::request_handler::update_request_status,
        maintenance_handlers::attachment_handler::upload_attachments,
        maintenance_handlers::attachment_handler::get_attachment_url,
        // Documents
        documents_handlers::document_handler::upload_document,
        documents_handlers::document_handler::list_documents,
        documents_handlers::document_handler::get_download_url,
        // Strata roll
        roll_handlers::roll_handler::list_roll,
        roll_handlers::roll_handler::roll_summary,
        // Committee (public)
        committee_handlers::committee_handler::list_committee,
        // Contact
        contact_handlers::contact_handler::create_contact_message,
        contact_handlers::contact_handler::list_contact_messages,
        // Budget
        budget_handlers::budget_handler::get_ledger,
        budget_handlers::budget_handler::add_income,
        budget_handlers::budget_handler::add_expense,
        budget_handlers::budget_handler::clear_ledger,
        // Dashboard
        dashboard_handlers::dashboard_handler::get_summary,
        // Rate limits
        rate_limits_handlers::rate_limit_handler::get_rate_limit_status,
        rate_limits_handlers::rate_limit_handler::list_rate_limit_configs,
        rate_limits_handlers::rate_limit_handler::update_rate_limit_config,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::AuthenticatedUser,
            ApiResponse<auth::model::AuthenticatedUser>,
            // Maintenance
            maintenance_models::RequestStatus,
            maintenance_models::RequestUrgency,
            maintenance_models::StatusFilter,
            maintenance_dtos::CreateMaintenanceRequestDto,
            maintenance_dtos::UpdateRequestStatusDto,
            maintenance_dtos::MaintenanceRequestResponseDto,
            maintenance_dtos::RequestDetailResponseDto,
            maintenance_dtos::RequestCountsDto,
            maintenance_dtos::AttachmentUploadResultDto,
            maintenance_dtos::AttachmentBatchResponseDto,
            maintenance_dtos::AttachmentResponseDto,
            maintenance_dtos::SignedAttachmentUrlDto,
            ApiResponse<maintenance_dtos::MaintenanceRequestResponseDto>,
            ApiResponse<Vec<maintenance_dtos::MaintenanceRequestResponseDto>>,
            ApiResponse<maintenance_dtos::RequestDetailResponseDto>,
            ApiResponse<maintenance_dtos::RequestCountsDto>,
            ApiResponse<maintenance_dtos::AttachmentBatchResponseDto>,
            ApiResponse<maintenance_dtos::SignedAttachmentUrlDto>,
            // Documents
            documents_models::DocumentCategory,
            documents_dtos::UploadDocumentDto,
            documents_dtos::DocumentResponseDto,
            documents_dtos::DocumentDownloadUrlDto,
            ApiResponse<documents_dtos::DocumentResponseDto>,
            ApiResponse<Vec<documents_dtos::DocumentResponseDto>>,
            ApiResponse<documents_dtos::DocumentDownloadUrlDto>,
            // Strata roll
            roll_models::OccupancyType,
            roll_dtos::UnitResponseDto,
            roll_dtos::RollSummaryDto,
            ApiResponse<Vec<roll_dtos::UnitResponseDto>>,
            ApiResponse<roll_dtos::RollSummaryDto>,
            // Committee
            committee_dtos::CommitteeMemberResponseDto,
            ApiResponse<Vec<committee_dtos::CommitteeMemberResponseDto>>,
            // Contact
            contact_dtos::CreateContactMessageDto,
            contact_dtos::ContactMessageResponseDto,
            ApiResponse<contact_dtos::ContactMessageResponseDto>,
            ApiResponse<Vec<contact_dtos::ContactMessageResponseDto>>,
            // Budget
            budget_dtos::AddIncomeDto,
            budget_dtos::AddExpenseDto,
            budget_dtos::BudgetEntryDto,
            budget_dtos::BudgetSummaryDto,
            budget_dtos::BudgetLedgerDto,
            ApiResponse<budget_dtos::BudgetLedgerDto>,
            // Dashboard
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
            // Rate limits
            rate_limits_dtos::RateLimitConfigResponseDto,
            rate_limits_dtos::UpdateRateLimitConfigDto,
            rate_limits_dtos::UserRateLimitStatusDto,
            ApiResponse<Vec<rate_limits_dtos::RateLimitConfigResponseDto>>,
            ApiResponse<rate_limits_dtos::RateLimitConfigResponseDto>,
            ApiResponse<rate_limits_dtos::UserRateLimitStatusDto>,
        )
    ),
    tags(
        (name = "auth", description = "Authenticated identity"),
        (name = "maintenance", description = "Maintenance request lifecycle"),
        (name = "documents", description = "Strata document repository"),
        (name = "roll", description = "Unit ownership roll (committee only)"),
        (name = "committee", description = "Committee member listing (public)"),
        (name = "contact", description = "Contact form"),
        (name = "budget", description = "Session-scoped budget ledger"),
        (name = "dashboard", description = "Resident dashboard summary"),
        (name = "rate-limits", description = "Daily submission limits"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "StrataHub API",
        version = "0.1.0",
        description = "API documentation for StrataHub",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
