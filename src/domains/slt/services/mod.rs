// SLT token domain services
pub mod state;
pub mod airdrop_service;

pub use airdrop_service::*;
