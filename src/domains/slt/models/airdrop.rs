use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// 에어드랍 파라미터 (query string 또는 JSON body)
/// Airdrop parameters (query string or JSON body)
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct AirdropParams {
    /// 받을 지갑 (public key)
    /// Receiving wallet (public key)
    pub wallet_address: Option<String>,
    /// 지급할 SLT 수량 (상한 없음)
    /// SLT amount to credit (no upper bound)
    pub amount: Option<f64>,
}

impl AirdropParams {
    /// query string 값을 우선으로 병합
    /// Merge with a fallback; fields present here win
    pub fn or(self, fallback: Option<AirdropParams>) -> AirdropParams {
        let fallback = fallback.unwrap_or_default();
        AirdropParams {
            wallet_address: self.wallet_address.or(fallback.wallet_address),
            amount: self.amount.or(fallback.amount),
        }
    }
}

/// 에어드랍 응답
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = AirdropResponse)]
pub struct AirdropResponse {
    pub success: bool,
    pub message: String,
    pub transaction_id: String,
}
