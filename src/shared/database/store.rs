// =====================================================
// Store traits (저장소 인터페이스)
// =====================================================
// 세 개의 독립 컬렉션(wallets, transactions, kyc_records)에 대한
// 접근 인터페이스입니다. Service 계층은 이 trait만 사용합니다.
//
// 구현체:
// - PostgreSQL repositories (sqlx)
// - MemoryStore (테스트 / DB 없는 데모)
//
// 컬렉션 간 트랜잭션은 없습니다.
// =====================================================

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domains::kyc::models::{KycRecord, KycStatus};
use crate::domains::transaction::models::{Transaction, TransactionStatus};
use crate::domains::wallet::models::Wallet;

/// 지갑 컬렉션
/// Wallet collection, keyed by public_key
#[async_trait]
pub trait WalletStore: Send + Sync {
    /// Public Key로 지갑 조회
    async fn find_by_public_key(&self, public_key: &str) -> Result<Option<Wallet>>;

    /// 없으면 저장, 있으면 기존 지갑 반환
    /// Insert unless a wallet with the same public_key exists; returns the stored record
    async fn insert_if_absent(&self, wallet: Wallet) -> Result<Wallet>;

    /// SLT 잔액 증가 (지갑이 없으면 아무것도 안 함)
    /// Atomically add to balance_slt; returns false when no wallet matched
    async fn increment_slt(&self, public_key: &str, amount: f64) -> Result<bool>;

    /// 지갑이 없으면 생성 후 SLT 잔액 증가
    /// Create the wallet if absent (address = public_key), then add to balance_slt
    async fn upsert_increment_slt(&self, public_key: &str, amount: f64) -> Result<()>;
}

/// 트랜잭션 컬렉션
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn insert(&self, transaction: &Transaction) -> Result<()>;

    /// 주소가 송신자 또는 수신자인 트랜잭션 (최신순, 최대 limit개)
    /// Transactions sent from or to `address`, newest first, at most `limit`
    async fn find_by_address(&self, address: &str, limit: usize) -> Result<Vec<Transaction>>;

    /// 상태 변경 (signature가 있을 때만 덮어씀)
    /// Set status (and signature when given); returns false when no record matched
    async fn update_status(
        &self,
        id: &str,
        status: TransactionStatus,
        signature: Option<&str>,
        updated_at: DateTime<Utc>,
    ) -> Result<bool>;
}

/// KYC 기록 컬렉션 (wallet_address당 1개)
#[async_trait]
pub trait KycStore: Send + Sync {
    /// wallet_address 기준으로 저장 (기존 기록은 교체)
    /// Store the record, replacing any existing record for the same wallet
    async fn upsert(&self, record: &KycRecord) -> Result<()>;

    async fn find_by_wallet(&self, wallet_address: &str) -> Result<Option<KycRecord>>;

    async fn set_status(
        &self,
        wallet_address: &str,
        status: KycStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool>;
}
