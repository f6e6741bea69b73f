use std::sync::Arc;
use crate::shared::database::{
    Database, KycRecordRepository, KycStore, MemoryStore, TransactionRepository,
    TransactionStore, WalletRepository, WalletStore,
};
use crate::domains::wallet::services::state::WalletState;
use crate::domains::transaction::services::state::TransactionState;
use crate::domains::kyc::services::state::KycState;
use crate::domains::slt::services::state::SltState;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 역할: NestJS의 Module에서 모든 Service를 주입하는 것과 유사
/// 요청 간 공유되는 것은 저장소 핸들뿐입니다.
#[derive(Clone)]
pub struct AppState {
    pub wallet_state: WalletState,
    pub transaction_state: TransactionState,
    pub kyc_state: KycState,
    pub slt_state: SltState,
}

impl AppState {
    /// PostgreSQL 저장소로 AppState 생성
    /// Create AppState backed by PostgreSQL repositories
    pub fn new(db: Database) -> Self {
        let wallets: Arc<dyn WalletStore> = Arc::new(WalletRepository::new(db.pool().clone()));
        let transactions: Arc<dyn TransactionStore> =
            Arc::new(TransactionRepository::new(db.pool().clone()));
        let kyc_records: Arc<dyn KycStore> = Arc::new(KycRecordRepository::new(db.pool().clone()));

        Self::from_stores(wallets, transactions, kyc_records)
    }

    /// 메모리 저장소로 AppState 생성 (테스트 / 데모)
    /// Create AppState backed by a (possibly pre-seeded) in-memory store
    pub fn in_memory(store: Arc<MemoryStore>) -> Self {
        Self::from_stores(store.clone(), store.clone(), store)
    }

    /// 각 도메인 State를 초기화하고 조합
    pub fn from_stores(
        wallets: Arc<dyn WalletStore>,
        transactions: Arc<dyn TransactionStore>,
        kyc_records: Arc<dyn KycStore>,
    ) -> Self {
        Self {
            wallet_state: WalletState::new(wallets.clone()),
            transaction_state: TransactionState::new(transactions.clone(), wallets.clone()),
            kyc_state: KycState::new(kyc_records),
            slt_state: SltState::new(wallets, transactions),
        }
    }
}
