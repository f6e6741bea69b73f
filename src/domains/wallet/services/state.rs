// Wallet domain state
// 지갑 도메인 상태
use std::sync::Arc;
use crate::shared::database::WalletStore;
use crate::domains::wallet::services::WalletService;

/// Wallet domain state
/// 지갑 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct WalletState {
    pub wallet_service: WalletService,
}

impl WalletState {
    /// Create WalletState with the wallet store
    pub fn new(wallets: Arc<dyn WalletStore>) -> Self {
        Self {
            wallet_service: WalletService::new(wallets),
        }
    }
}
