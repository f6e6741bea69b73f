// Wallet domain services
pub mod state;
pub mod wallet_service;

pub use wallet_service::*;
