// Shared errors
pub mod wallet_error;
pub mod transaction_error;
pub mod kyc_error;

pub use wallet_error::*;
pub use transaction_error::*;
pub use kyc_error::*;
