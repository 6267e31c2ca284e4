mod document_dto;

pub use document_dto::{
    is_document_type_allowed, DocumentDownloadUrlDto, DocumentListQuery, DocumentResponseDto,
    UploadDocumentDto, ALLOWED_DOCUMENT_TYPES, MAX_DOCUMENT_SIZE,
};
