// KYC domain models
pub mod kyc;

pub use kyc::*;
