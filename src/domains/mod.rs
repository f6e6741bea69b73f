// Domain modules
pub mod wallet;
pub mod transaction;
pub mod kyc;
pub mod slt;
pub mod health;
