pub mod budget_handler;
