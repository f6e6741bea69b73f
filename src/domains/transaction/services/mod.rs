// Transaction domain services
pub mod state;
pub mod transaction_service;

pub use transaction_service::*;
