use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 이 시간이 지나면 under_review
/// Seconds after which a record moves to under_review
pub const REVIEW_AFTER_SECS: i64 = 60;

/// 이 시간이 지나면 approved
/// Seconds after which a record is approved
pub const APPROVE_AFTER_SECS: i64 = 300;

// KYC 상태
// KYC status (mock progression driven by elapsed time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    /// 기록 없음 (저장되지 않음)
    /// No record; never persisted
    NotStarted,
    Pending,
    UnderReview,
    Approved,
}

impl KycStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::NotStarted => "not_started",
            KycStatus::Pending => "pending",
            KycStatus::UnderReview => "under_review",
            KycStatus::Approved => "approved",
        }
    }

    /// 경과 시간으로 상태 결정
    /// Derive the status from time elapsed since the record was created.
    /// Negative elapsed time (clock skew) counts as pending.
    pub fn from_elapsed(elapsed: Duration) -> Self {
        let secs = elapsed.num_seconds();
        if secs < REVIEW_AFTER_SECS {
            KycStatus::Pending
        } else if secs < APPROVE_AFTER_SECS {
            KycStatus::UnderReview
        } else {
            KycStatus::Approved
        }
    }

    /// 생성 시간과 현재 시간으로 상태 결정
    pub fn at(created_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_elapsed(now - created_at)
    }
}

impl FromStr for KycStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(KycStatus::NotStarted),
            "pending" => Ok(KycStatus::Pending),
            "under_review" => Ok(KycStatus::UnderReview),
            "approved" => Ok(KycStatus::Approved),
            other => Err(format!("unknown KYC status: {}", other)),
        }
    }
}

impl fmt::Display for KycStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// KYC 기록 (wallet_address당 1개)
// KYC record, one per wallet address
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[schema(as = KycRecord)]
pub struct KycRecord {
    pub id: String,
    pub wallet_address: String,
    pub email: String,
    pub full_name: String,
    pub status: KycStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl KycRecord {
    pub fn new(request: StartKycRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            wallet_address: request.wallet_address,
            email: request.email,
            full_name: request.full_name,
            status: KycStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

/// KYC 시작 요청
/// Start KYC request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = StartKycRequest)]
pub struct StartKycRequest {
    pub wallet_address: String,
    #[schema(example = "user@example.com")]
    pub email: String,
    #[schema(example = "Ana Pérez")]
    pub full_name: String,
}

/// KYC 시작 응답
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = StartKycResponse)]
pub struct StartKycResponse {
    pub success: bool,
    pub kyc_id: String,
    pub status: KycStatus,
    pub message: String,
}

/// KYC 상태 조회 응답
/// KYC status response. Timestamps are absent when KYC was never started.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = KycStatusResponse)]
pub struct KycStatusResponse {
    pub wallet_address: String,
    pub status: KycStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
