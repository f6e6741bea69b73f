// SLT token domain models
pub mod airdrop;

pub use airdrop::*;
