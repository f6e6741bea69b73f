use std::sync::Arc;
use chrono::{DateTime, Utc};

use crate::shared::database::KycStore;
use crate::domains::kyc::models::{
    KycRecord, KycStatus, KycStatusResponse, StartKycRequest, StartKycResponse,
};
use crate::shared::errors::KycError;

/// KYC 서비스 (mock)
/// KycService: simulated identity verification.
///
/// 실제 검증 없음. 상태는 생성 후 경과 시간으로만 결정됩니다.
/// No real checks; status is a pure function of time since the record was created.
#[derive(Clone)]
pub struct KycService {
    records: Arc<dyn KycStore>,
}

impl KycService {
    pub fn new(records: Arc<dyn KycStore>) -> Self {
        Self { records }
    }

    /// KYC 시작 (기존 기록이 있으면 새 기록으로 교체)
    /// Start KYC; an existing record for the wallet is replaced
    pub async fn start_kyc(&self, request: StartKycRequest) -> Result<StartKycResponse, KycError> {
        let record = KycRecord::new(request);

        self.records
            .upsert(&record)
            .await
            .map_err(|e| KycError::DatabaseError(format!("Failed to start KYC: {:#}", e)))?;

        log::info!("KYC started: wallet={} kyc_id={}", record.wallet_address, record.id);

        Ok(StartKycResponse {
            success: true,
            kyc_id: record.id,
            status: KycStatus::Pending,
            message: "KYC process started. Please check back later for status updates.".to_string(),
        })
    }

    /// 현재 시각 기준 KYC 상태
    pub async fn get_status(&self, wallet_address: &str) -> Result<KycStatusResponse, KycError> {
        self.get_status_at(wallet_address, Utc::now()).await
    }

    /// 주어진 시각 기준 KYC 상태 (재계산 후 저장)
    /// Status as of `now`: recomputed from created_at and persisted on every read.
    /// A wallet without a record is `not_started`, which is never stored.
    pub async fn get_status_at(
        &self,
        wallet_address: &str,
        now: DateTime<Utc>,
    ) -> Result<KycStatusResponse, KycError> {
        let record = self
            .records
            .find_by_wallet(wallet_address)
            .await
            .map_err(|e| KycError::DatabaseError(format!("Failed to get KYC status: {:#}", e)))?;

        let Some(record) = record else {
            return Ok(KycStatusResponse {
                wallet_address: wallet_address.to_string(),
                status: KycStatus::NotStarted,
                created_at: None,
                updated_at: None,
                message: Some("KYC process not started for this wallet".to_string()),
            });
        };

        let status = KycStatus::at(record.created_at, now);

        self.records
            .set_status(wallet_address, status, now)
            .await
            .map_err(|e| KycError::DatabaseError(format!("Failed to get KYC status: {:#}", e)))?;

        if status != record.status {
            log::info!("KYC {} for {}: {} -> {}", record.id, wallet_address, record.status, status);
        }

        Ok(KycStatusResponse {
            wallet_address: wallet_address.to_string(),
            status,
            created_at: Some(record.created_at),
            updated_at: Some(now),
            message: None,
        })
    }
}
