use sqlx::{PgPool, Row, postgres::PgRow};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::domains::transaction::models::{Transaction, TransactionStatus, TokenType};
use crate::shared::database::store::TransactionStore;

// 트랜잭션 레포지토리
// TransactionRepository: handles all database operations for transactions

pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // token_type / status는 TEXT로 저장
    fn transaction_from_row(row: &PgRow) -> Result<Transaction> {
        let token_type: String = row.get("token_type");
        let status: String = row.get("status");

        Ok(Transaction {
            id: row.get("id"),
            from_address: row.get("from_address"),
            to_address: row.get("to_address"),
            amount: row.get("amount"),
            token_type: token_type.parse::<TokenType>().map_err(|e| anyhow!(e))?,
            signature: row.get("signature"),
            status: status.parse::<TransactionStatus>().map_err(|e| anyhow!(e))?,
            timestamp: row.get("timestamp"),
            reward_slt: row.get("reward_slt"),
            updated_at: row.get("updated_at"),
        })
    }
}

#[async_trait]
impl TransactionStore for TransactionRepository {
    // 트랜잭션 저장
    // Insert transaction
    async fn insert(&self, transaction: &Transaction) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO transactions
                (id, from_address, to_address, amount, token_type, signature, status, "timestamp", reward_slt, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(&transaction.id)
        .bind(&transaction.from_address)
        .bind(&transaction.to_address)
        .bind(transaction.amount)
        .bind(transaction.token_type.as_str())
        .bind(transaction.signature.as_deref())
        .bind(transaction.status.as_str())
        .bind(transaction.timestamp)
        .bind(transaction.reward_slt)
        .bind(transaction.updated_at)
        .execute(&self.pool)
        .await
        .context("Failed to insert transaction")?;

        Ok(())
    }

    // 지갑 거래 내역 조회 (송신 또는 수신, 최신순)
    // Get transactions where the address is sender or receiver, newest first
    async fn find_by_address(&self, address: &str, limit: usize) -> Result<Vec<Transaction>> {
        let rows = sqlx::query(
            r#"
            SELECT id, from_address, to_address, amount, token_type, signature, status, "timestamp", reward_slt, updated_at
            FROM transactions
            WHERE from_address = $1 OR to_address = $1
            ORDER BY "timestamp" DESC
            LIMIT $2
            "#,
        )
        .bind(address)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch transactions by address")?;

        rows.iter().map(Self::transaction_from_row).collect()
    }

    // 상태 변경 (signature는 주어졌을 때만 변경)
    // Update status; signature only when provided
    async fn update_status(
        &self,
        id: &str,
        status: TransactionStatus,
        signature: Option<&str>,
        updated_at: DateTime<Utc>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE transactions
            SET status = $1,
                signature = COALESCE($2, signature),
                updated_at = $3
            WHERE id = $4
            "#,
        )
        .bind(status.as_str())
        .bind(signature)
        .bind(updated_at)
        .bind(id)
        .execute(&self.pool)
        .await
        .context("Failed to update transaction status")?;

        Ok(result.rows_affected() > 0)
    }
}
