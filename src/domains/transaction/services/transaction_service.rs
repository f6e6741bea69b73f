use std::sync::Arc;
use chrono::Utc;

use crate::shared::database::{TransactionStore, WalletStore};
use crate::domains::transaction::models::{
    CreateTransactionRequest, Transaction, TransactionStatus, UpdateStatusResponse,
};
use crate::shared::errors::TransactionError;

/// 트랜잭션 서비스
/// TransactionService: transaction log with the flat USDC → SLT reward
#[derive(Clone)]
pub struct TransactionService {
    transactions: Arc<dyn TransactionStore>,
    wallets: Arc<dyn WalletStore>,
}

impl TransactionService {
    pub fn new(transactions: Arc<dyn TransactionStore>, wallets: Arc<dyn WalletStore>) -> Self {
        Self { transactions, wallets }
    }

    /// 트랜잭션 기록 생성 + 송신자에게 SLT 보상 지급
    /// Record a transaction and credit the sender's SLT reward.
    ///
    /// 보상 지급은 저장 이후 별도 증가 연산으로 수행되며, 실패해도 롤백하지 않습니다.
    /// The credit is a separate increment after the insert; nothing is rolled back.
    pub async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, TransactionError> {
        let transaction = Transaction::new(request);

        self.transactions
            .insert(&transaction)
            .await
            .map_err(|e| TransactionError::DatabaseError(format!("Failed to create transaction: {:#}", e)))?;

        log::info!(
            "Transaction recorded: id={} {} {} {} -> {} reward_slt={}",
            transaction.id,
            transaction.amount,
            transaction.token_type,
            transaction.from_address,
            transaction.to_address,
            transaction.reward_slt
        );

        if transaction.reward_slt > 0.0 {
            let credited = self
                .wallets
                .increment_slt(&transaction.from_address, transaction.reward_slt)
                .await
                .map_err(|e| TransactionError::DatabaseError(format!("Failed to create transaction: {:#}", e)))?;

            if !credited {
                log::warn!(
                    "SLT reward not credited, no wallet for sender {}",
                    transaction.from_address
                );
            }
        }

        Ok(transaction)
    }

    /// 지갑 거래 내역 (송신/수신, 최신순)
    /// Wallet transaction history, newest first
    pub async fn get_wallet_transactions(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<Transaction>, TransactionError> {
        self.transactions
            .find_by_address(address, limit)
            .await
            .map_err(|e| TransactionError::DatabaseError(format!("Failed to get transactions: {:#}", e)))
    }

    /// 트랜잭션 상태 변경
    /// Update status (and signature, when a non-empty one is given)
    pub async fn update_status(
        &self,
        id: &str,
        status: TransactionStatus,
        signature: Option<&str>,
    ) -> Result<UpdateStatusResponse, TransactionError> {
        let signature = signature.filter(|s| !s.is_empty());

        let matched = self
            .transactions
            .update_status(id, status, signature, Utc::now())
            .await
            .map_err(|e| TransactionError::DatabaseError(format!("Failed to update transaction: {:#}", e)))?;

        if !matched {
            return Err(TransactionError::NotFound { id: id.to_string() });
        }

        log::info!("Transaction {} status -> {}", id, status);

        Ok(UpdateStatusResponse {
            success: true,
            message: "Transaction status updated".to_string(),
        })
    }
}
