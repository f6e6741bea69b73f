// KYC domain services
pub mod state;
pub mod kyc_service;

pub use kyc_service::*;
