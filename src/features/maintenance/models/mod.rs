mod attachment;
mod request;

pub use attachment::Attachment;
pub use request::{
    transition_fields, MaintenanceRequest, RequestStatus, RequestUrgency, StatusFilter,
};
