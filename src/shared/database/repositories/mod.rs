// All repositories module (PostgreSQL implementations of the store traits)
pub mod wallet;
pub mod transaction;
pub mod kyc;

// Re-export all repositories for convenience
pub use wallet::*;
pub use transaction::*;
pub use kyc::*;
