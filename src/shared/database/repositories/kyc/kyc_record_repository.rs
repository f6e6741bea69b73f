use sqlx::{PgPool, Row, postgres::PgRow};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::domains::kyc::models::{KycRecord, KycStatus};
use crate::shared::database::store::KycStore;

// KYC 기록 레포지토리
// KycRecordRepository: database operations for KYC records (UNIQUE(wallet_address))

pub struct KycRecordRepository {
    pool: PgPool,
}

impl KycRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn record_from_row(row: &PgRow) -> Result<KycRecord> {
        let status: String = row.get("status");

        Ok(KycRecord {
            id: row.get("id"),
            wallet_address: row.get("wallet_address"),
            email: row.get("email"),
            full_name: row.get("full_name"),
            status: status.parse::<KycStatus>().map_err(|e| anyhow!(e))?,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

#[async_trait]
impl KycStore for KycRecordRepository {
    // KYC 기록 저장 (같은 지갑의 기존 기록은 교체)
    // Insert KYC record, replacing the existing one for the wallet
    async fn upsert(&self, record: &KycRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO kyc_records (id, wallet_address, email, full_name, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (wallet_address)
            DO UPDATE SET
                id = EXCLUDED.id,
                email = EXCLUDED.email,
                full_name = EXCLUDED.full_name,
                status = EXCLUDED.status,
                created_at = EXCLUDED.created_at,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(&record.id)
        .bind(&record.wallet_address)
        .bind(&record.email)
        .bind(&record.full_name)
        .bind(record.status.as_str())
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .context("Failed to upsert KYC record")?;

        Ok(())
    }

    async fn find_by_wallet(&self, wallet_address: &str) -> Result<Option<KycRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, wallet_address, email, full_name, status, created_at, updated_at
            FROM kyc_records
            WHERE wallet_address = $1
            "#,
        )
        .bind(wallet_address)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch KYC record by wallet_address")?;

        row.as_ref().map(Self::record_from_row).transpose()
    }

    async fn set_status(
        &self,
        wallet_address: &str,
        status: KycStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE kyc_records
            SET status = $1, updated_at = $2
            WHERE wallet_address = $3
            "#,
        )
        .bind(status.as_str())
        .bind(updated_at)
        .bind(wallet_address)
        .execute(&self.pool)
        .await
        .context("Failed to update KYC status")?;

        Ok(result.rows_affected() > 0)
    }
}
