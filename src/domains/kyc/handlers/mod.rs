// KYC domain handlers
pub mod kyc_handler;
