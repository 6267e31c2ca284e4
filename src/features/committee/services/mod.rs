mod committee_service;

pub use committee_service::CommitteeService;
