// SLT token domain state
// SLT 토큰 도메인 상태
use std::sync::Arc;
use crate::shared::database::{TransactionStore, WalletStore};
use crate::domains::slt::services::AirdropService;

/// SLT domain state
#[derive(Clone)]
pub struct SltState {
    pub airdrop_service: AirdropService,
}

impl SltState {
    pub fn new(wallets: Arc<dyn WalletStore>, transactions: Arc<dyn TransactionStore>) -> Self {
        Self {
            airdrop_service: AirdropService::new(wallets, transactions),
        }
    }
}
