// KYC repositories
pub mod kyc_record_repository;

pub use kyc_record_repository::*;
