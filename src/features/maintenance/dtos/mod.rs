mod attachment_dto;
mod request_dto;

pub use attachment_dto::{
    get_extension_from_content_type, validate_attachment, AttachmentBatchResponseDto,
    AttachmentRejection, AttachmentResponseDto, AttachmentUploadResultDto, IncomingFile,
    SignedAttachmentUrlDto, ALLOWED_ATTACHMENT_TYPES, MAX_ATTACHMENTS_PER_BATCH,
    MAX_ATTACHMENT_SIZE,
};
pub use request_dto::{
    CreateMaintenanceRequestDto, MaintenanceRequestResponseDto, RequestCountsDto,
    RequestDetailResponseDto, RequestListQuery, UpdateRequestStatusDto,
};
