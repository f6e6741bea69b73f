use utoipa::OpenApi;

// Import models for OpenAPI schema
use crate::domains::wallet::models::*;
use crate::domains::transaction::models::*;
use crate::domains::kyc::models::*;
use crate::domains::slt::models::*;
use crate::domains::health::HealthResponse;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::domains::wallet::handlers::wallet_handler::create_wallet,
        crate::domains::wallet::handlers::wallet_handler::get_wallet,
        crate::domains::wallet::handlers::wallet_handler::get_balance,
        crate::domains::wallet::handlers::wallet_handler::get_wallet_transactions,
        crate::domains::transaction::handlers::transaction_handler::create_transaction,
        crate::domains::transaction::handlers::transaction_handler::update_transaction_status,
        crate::domains::kyc::handlers::kyc_handler::start_kyc,
        crate::domains::kyc::handlers::kyc_handler::get_kyc_status,
        crate::domains::slt::handlers::airdrop_handler::airdrop_slt,
        crate::domains::health::health_handler::health_check
    ),
    components(schemas(
        Wallet,
        CreateWalletRequest,
        Balances,
        WalletBalanceResponse,
        Transaction,
        TokenType,
        TransactionStatus,
        CreateTransactionRequest,
        UpdateStatusResponse,
        KycRecord,
        KycStatus,
        StartKycRequest,
        StartKycResponse,
        KycStatusResponse,
        AirdropResponse,
        HealthResponse
    )),
    tags(
        (name = "Wallets", description = "Wallet registration and mock balances"),
        (name = "Transactions", description = "Transaction log with SLT rewards"),
        (name = "KYC", description = "Mock KYC status simulator"),
        (name = "SLT", description = "SLT reward token management"),
        (name = "Health", description = "Liveness check")
    ),
    info(
        title = "SUÉLTALO Crypto Wallet API",
        description = "Wallet demo backend: registration, mock balances, transaction log, mock KYC",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
