pub mod committee_handler;
