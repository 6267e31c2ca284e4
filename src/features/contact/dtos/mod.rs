mod contact_dto;

pub use contact_dto::{ContactMessageResponseDto, CreateContactMessageDto};
