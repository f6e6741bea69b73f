use std::sync::Arc;

use crate::shared::database::{TransactionStore, WalletStore};
use crate::domains::slt::models::AirdropResponse;
use crate::domains::transaction::models::Transaction;
use crate::shared::errors::WalletError;

/// SLT 에어드랍 서비스
/// AirdropService: unconditional SLT credits (no cap, no authorization)
#[derive(Clone)]
pub struct AirdropService {
    wallets: Arc<dyn WalletStore>,
    transactions: Arc<dyn TransactionStore>,
}

impl AirdropService {
    pub fn new(wallets: Arc<dyn WalletStore>, transactions: Arc<dyn TransactionStore>) -> Self {
        Self { wallets, transactions }
    }

    /// SLT 지급 + 기록용 트랜잭션 생성
    /// Credit `amount` SLT (creating the wallet if needed) and record a confirmed
    /// transaction from the airdrop sentinel.
    pub async fn airdrop(
        &self,
        wallet_address: &str,
        amount: f64,
    ) -> Result<AirdropResponse, WalletError> {
        // 1. 잔액 증가 (지갑 없으면 생성)
        self.wallets
            .upsert_increment_slt(wallet_address, amount)
            .await
            .map_err(|e| WalletError::DatabaseError(format!("Failed to airdrop SLT: {:#}", e)))?;

        // 2. 에어드랍 기록
        let transaction = Transaction::airdrop(wallet_address, amount);
        self.transactions
            .insert(&transaction)
            .await
            .map_err(|e| WalletError::DatabaseError(format!("Failed to airdrop SLT: {:#}", e)))?;

        log::info!("Airdropped {} SLT to {} (tx {})", amount, wallet_address, transaction.id);

        Ok(AirdropResponse {
            success: true,
            message: format!("Airdropped {} SLT to {}", amount, wallet_address),
            transaction_id: transaction.id,
        })
    }
}
