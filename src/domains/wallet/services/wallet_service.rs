use std::sync::Arc;
use chrono::Utc;

use crate::shared::database::WalletStore;
use crate::domains::wallet::models::{Balances, CreateWalletRequest, Wallet, WalletBalanceResponse};
use crate::shared::errors::WalletError;

/// 지갑 서비스
/// 역할: NestJS의 Service 같은 것
/// WalletService: wallet registration and mock balance lookups
#[derive(Clone)]
pub struct WalletService {
    wallets: Arc<dyn WalletStore>,
}

impl WalletService {
    /// 생성자
    /// Constructor
    pub fn new(wallets: Arc<dyn WalletStore>) -> Self {
        Self { wallets }
    }

    /// 지갑 등록 (public_key 기준 멱등)
    /// Register a wallet. Idempotent by public_key: a second call returns the original.
    pub async fn create_wallet(&self, request: CreateWalletRequest) -> Result<Wallet, WalletError> {
        let candidate = Wallet::new(request.public_key, request.address);
        let candidate_id = candidate.id.clone();

        let wallet = self
            .wallets
            .insert_if_absent(candidate)
            .await
            .map_err(|e| WalletError::DatabaseError(format!("Failed to create wallet: {:#}", e)))?;

        if wallet.id == candidate_id {
            log::info!("Wallet registered: public_key={}", wallet.public_key);
        }

        Ok(wallet)
    }

    /// Public Key로 지갑 조회
    /// Get wallet by public key
    pub async fn get_wallet(&self, public_key: &str) -> Result<Wallet, WalletError> {
        let wallet = self
            .wallets
            .find_by_public_key(public_key)
            .await
            .map_err(|e| WalletError::DatabaseError(format!("Failed to get wallet: {:#}", e)))?;

        wallet.ok_or(WalletError::WalletNotFound { public_key: public_key.to_string() })
    }

    /// 잔액 조회 (지갑이 없으면 잔액 0으로 생성)
    /// Get balances; an unknown public key gets a fresh wallet (address = public_key)
    pub async fn get_balance(&self, public_key: &str) -> Result<WalletBalanceResponse, WalletError> {
        let wallet = self
            .wallets
            .insert_if_absent(Wallet::new(public_key, public_key))
            .await
            .map_err(|e| WalletError::DatabaseError(format!("Failed to get balance: {:#}", e)))?;

        Ok(WalletBalanceResponse {
            public_key: public_key.to_string(),
            balances: Balances::from(&wallet),
            timestamp: Utc::now(),
        })
    }
}
