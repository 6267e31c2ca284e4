mod roll_service;

pub use roll_service::RollService;
