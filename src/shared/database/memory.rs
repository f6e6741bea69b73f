use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::domains::kyc::models::{KycRecord, KycStatus};
use crate::domains::transaction::models::{Transaction, TransactionStatus};
use crate::domains::wallet::models::Wallet;
use super::store::{KycStore, TransactionStore, WalletStore};

/// 메모리 저장소
/// In-memory store backing all three collections.
///
/// 테스트와 DB 없는 데모 실행에 사용합니다.
/// 각 컬렉션은 별도의 RwLock으로 보호되며, 잔액 증가는 쓰기 잠금 안에서 수행됩니다.
#[derive(Default)]
pub struct MemoryStore {
    wallets: RwLock<HashMap<String, Wallet>>,
    transactions: RwLock<Vec<Transaction>>,
    kyc_records: RwLock<HashMap<String, KycRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wallet_count(&self) -> usize {
        self.wallets.read().len()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.read().len()
    }
}

#[async_trait]
impl WalletStore for MemoryStore {
    async fn find_by_public_key(&self, public_key: &str) -> Result<Option<Wallet>> {
        Ok(self.wallets.read().get(public_key).cloned())
    }

    async fn insert_if_absent(&self, wallet: Wallet) -> Result<Wallet> {
        let mut wallets = self.wallets.write();
        let stored = wallets
            .entry(wallet.public_key.clone())
            .or_insert(wallet);
        Ok(stored.clone())
    }

    async fn increment_slt(&self, public_key: &str, amount: f64) -> Result<bool> {
        let mut wallets = self.wallets.write();
        match wallets.get_mut(public_key) {
            Some(wallet) => {
                wallet.balance_slt += amount;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn upsert_increment_slt(&self, public_key: &str, amount: f64) -> Result<()> {
        let mut wallets = self.wallets.write();
        let wallet = wallets
            .entry(public_key.to_string())
            .or_insert_with(|| Wallet::new(public_key, public_key));
        wallet.balance_slt += amount;
        Ok(())
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn insert(&self, transaction: &Transaction) -> Result<()> {
        self.transactions.write().push(transaction.clone());
        Ok(())
    }

    async fn find_by_address(&self, address: &str, limit: usize) -> Result<Vec<Transaction>> {
        // 최근 삽입분부터 순회 → 같은 timestamp면 나중 것이 앞
        let mut matches: Vec<Transaction> = self
            .transactions
            .read()
            .iter()
            .rev()
            .filter(|tx| tx.from_address == address || tx.to_address == address)
            .cloned()
            .collect();

        matches.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        matches.truncate(limit);
        Ok(matches)
    }

    async fn update_status(
        &self,
        id: &str,
        status: TransactionStatus,
        signature: Option<&str>,
        updated_at: DateTime<Utc>,
    ) -> Result<bool> {
        let mut transactions = self.transactions.write();
        match transactions.iter_mut().find(|tx| tx.id == id) {
            Some(tx) => {
                tx.status = status;
                if let Some(signature) = signature {
                    tx.signature = Some(signature.to_string());
                }
                tx.updated_at = Some(updated_at);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl KycStore for MemoryStore {
    async fn upsert(&self, record: &KycRecord) -> Result<()> {
        self.kyc_records
            .write()
            .insert(record.wallet_address.clone(), record.clone());
        Ok(())
    }

    async fn find_by_wallet(&self, wallet_address: &str) -> Result<Option<KycRecord>> {
        Ok(self.kyc_records.read().get(wallet_address).cloned())
    }

    async fn set_status(
        &self,
        wallet_address: &str,
        status: KycStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool> {
        let mut records = self.kyc_records.write();
        match records.get_mut(wallet_address) {
            Some(record) => {
                record.status = status;
                record.updated_at = updated_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
