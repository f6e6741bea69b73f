// KYC domain state
// KYC 도메인 상태
use std::sync::Arc;
use crate::shared::database::KycStore;
use crate::domains::kyc::services::KycService;

/// KYC domain state
#[derive(Clone)]
pub struct KycState {
    pub kyc_service: KycService,
}

impl KycState {
    pub fn new(records: Arc<dyn KycStore>) -> Self {
        Self {
            kyc_service: KycService::new(records),
        }
    }
}
