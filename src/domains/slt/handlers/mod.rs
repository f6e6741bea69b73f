// SLT token domain handlers
pub mod airdrop_handler;
