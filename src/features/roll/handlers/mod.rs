pub mod roll_handler;
