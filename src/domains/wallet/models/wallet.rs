use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use chrono::{DateTime, Utc};
use uuid::Uuid;

// 지갑 모델
// Wallet: a registered wallet with its mock balances
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[schema(as = Wallet)]
pub struct Wallet {
    /// Wallet ID (UUID v4 string)
    /// 지갑 ID
    pub id: String,

    /// Public key (unique)
    /// 공개 키 (유일)
    #[schema(example = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU")]
    pub public_key: String,

    /// Wallet address (free-form)
    /// 지갑 주소
    pub address: String,

    /// Created timestamp
    /// 생성 시간
    pub created_at: DateTime<Utc>,

    /// SOL 잔액 (mock)
    #[schema(example = 0.0)]
    pub balance_sol: f64,

    /// USDC 잔액 (mock)
    #[schema(example = 0.0)]
    pub balance_usdc: f64,

    /// SLT 잔액 (보상 토큰)
    /// SLT balance (reward token)
    #[schema(example = 0.0)]
    pub balance_slt: f64,
}

impl Wallet {
    /// 새 지갑 (모든 잔액 0)
    /// New wallet with all balances at zero
    pub fn new(public_key: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            public_key: public_key.into(),
            address: address.into(),
            created_at: Utc::now(),
            balance_sol: 0.0,
            balance_usdc: 0.0,
            balance_slt: 0.0,
        }
    }
}

/// 지갑 생성 요청
/// Create (register) wallet request
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = CreateWalletRequest)]
pub struct CreateWalletRequest {
    #[schema(example = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU")]
    pub public_key: String,

    #[schema(example = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU")]
    pub address: String,
}

/// 토큰별 잔액
/// Balances per token
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[schema(as = Balances)]
pub struct Balances {
    #[serde(rename = "SOL")]
    pub sol: f64,

    #[serde(rename = "USDC")]
    pub usdc: f64,

    #[serde(rename = "SLT")]
    pub slt: f64,
}

impl From<&Wallet> for Balances {
    fn from(wallet: &Wallet) -> Self {
        Self {
            sol: wallet.balance_sol,
            usdc: wallet.balance_usdc,
            slt: wallet.balance_slt,
        }
    }
}

/// 지갑 잔액 조회 응답
/// Wallet balance response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = WalletBalanceResponse)]
pub struct WalletBalanceResponse {
    pub public_key: String,
    pub balances: Balances,
    pub timestamp: DateTime<Utc>,
}
