// Transaction domain state
// 트랜잭션 도메인 상태
use std::sync::Arc;
use crate::shared::database::{TransactionStore, WalletStore};
use crate::domains::transaction::services::TransactionService;

/// Transaction domain state
#[derive(Clone)]
pub struct TransactionState {
    pub transaction_service: TransactionService,
}

impl TransactionState {
    /// Create TransactionState (보상 지급을 위해 지갑 저장소도 필요)
    pub fn new(transactions: Arc<dyn TransactionStore>, wallets: Arc<dyn WalletStore>) -> Self {
        Self {
            transaction_service: TransactionService::new(transactions, wallets),
        }
    }
}
