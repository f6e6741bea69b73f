use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// USDC 1개당 지급되는 SLT 보상
/// SLT reward per USDC transferred
pub const USDC_REWARD_RATE: f64 = 0.1;

/// 에어드랍 트랜잭션의 송신자 (가상 주소)
/// Sentinel sender of airdrop transactions
pub const AIRDROP_SENDER: &str = "SYSTEM_AIRDROP";

/// 거래 내역 기본 조회 개수
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

// 토큰 종류
// Token type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenType {
    Sol,
    Usdc,
    Slt,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Sol => "SOL",
            TokenType::Usdc => "USDC",
            TokenType::Slt => "SLT",
        }
    }
}

impl FromStr for TokenType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SOL" => Ok(TokenType::Sol),
            "USDC" => Ok(TokenType::Usdc),
            "SLT" => Ok(TokenType::Slt),
            other => Err(format!("unknown token type: {}", other)),
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 트랜잭션 상태
// Transaction status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,    // 생성됨, 확인 대기
    Confirmed,  // 확인됨
    Failed,     // 실패함
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Confirmed => "confirmed",
            TransactionStatus::Failed => "failed",
        }
    }
}

impl FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TransactionStatus::Pending),
            "confirmed" => Ok(TransactionStatus::Confirmed),
            "failed" => Ok(TransactionStatus::Failed),
            other => Err(format!("unknown transaction status: {}", other)),
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SLT 보상 계산
/// SLT reward for a transfer: only positive USDC transfers earn one.
pub fn reward_for(token_type: TokenType, amount: f64) -> f64 {
    if token_type == TokenType::Usdc && amount > 0.0 {
        amount * USDC_REWARD_RATE
    } else {
        0.0
    }
}

// 트랜잭션 기록
// Transaction record. Immutable except for status/signature.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[schema(as = Transaction)]
pub struct Transaction {
    /// Transaction ID (UUID v4 string)
    pub id: String,

    #[schema(example = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU")]
    pub from_address: String,

    #[schema(example = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM")]
    pub to_address: String,

    #[schema(example = 10.5)]
    pub amount: f64,

    pub token_type: TokenType,

    /// On-chain signature (optional)
    pub signature: Option<String>,

    pub status: TransactionStatus,

    pub timestamp: DateTime<Utc>,

    /// SLT reward computed at creation, never recomputed
    /// 생성 시 한 번만 계산되는 SLT 보상
    #[schema(example = 1.05)]
    pub reward_slt: f64,

    /// 마지막 상태 변경 시간
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// 사용자 트랜잭션 생성 (보상 포함, 상태 pending)
    /// New user transaction: pending, reward computed now
    pub fn new(request: CreateTransactionRequest) -> Self {
        let reward_slt = reward_for(request.token_type, request.amount);
        Self {
            id: Uuid::new_v4().to_string(),
            from_address: request.from_address,
            to_address: request.to_address,
            amount: request.amount,
            token_type: request.token_type,
            signature: request.signature,
            status: TransactionStatus::Pending,
            timestamp: Utc::now(),
            reward_slt,
            updated_at: None,
        }
    }

    /// 에어드랍 기록용 트랜잭션 (이미 confirmed)
    /// Synthetic airdrop transaction, already confirmed
    pub fn airdrop(to_address: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            from_address: AIRDROP_SENDER.to_string(),
            to_address: to_address.into(),
            amount,
            token_type: TokenType::Slt,
            signature: None,
            status: TransactionStatus::Confirmed,
            timestamp: Utc::now(),
            reward_slt: 0.0,
            updated_at: None,
        }
    }
}

/// 트랜잭션 생성 요청
/// Create transaction request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = CreateTransactionRequest)]
pub struct CreateTransactionRequest {
    pub from_address: String,
    pub to_address: String,
    #[schema(example = 10.5)]
    pub amount: f64,
    pub token_type: TokenType,
    #[serde(default)]
    pub signature: Option<String>,
}

/// 거래 내역 쿼리 파라미터
/// Query parameters for wallet transaction history
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct TransactionsQuery {
    /// 최대 조회 개수 (기본: 50)
    /// Maximum number of transactions (default: 50)
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

/// 상태 변경 파라미터 (query string 또는 JSON body)
/// Status update parameters (query string or JSON body)
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct UpdateStatusParams {
    /// New status: pending, confirmed or failed
    pub status: Option<TransactionStatus>,
    /// Signature to attach (ignored when empty)
    pub signature: Option<String>,
}

impl UpdateStatusParams {
    /// query string 값을 우선으로 병합
    /// Merge with a fallback; fields present here win
    pub fn or(self, fallback: Option<UpdateStatusParams>) -> UpdateStatusParams {
        let fallback = fallback.unwrap_or_default();
        UpdateStatusParams {
            status: self.status.or(fallback.status),
            signature: self.signature.or(fallback.signature),
        }
    }
}

/// 상태 변경 응답
/// Status update acknowledgement
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = UpdateStatusResponse)]
pub struct UpdateStatusResponse {
    pub success: bool,
    pub message: String,
}
