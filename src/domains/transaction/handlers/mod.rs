// Transaction domain handlers
pub mod transaction_handler;
