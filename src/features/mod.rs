pub mod auth;
pub mod budget;
pub mod committee;
pub mod contact;
pub mod dashboard;
pub mod documents;
pub mod maintenance;
pub mod rate_limits;
pub mod roll;
