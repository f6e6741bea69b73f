use sqlx::{PgPool, Row, postgres::PgRow};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;
use crate::domains::wallet::models::Wallet;
use crate::shared::database::store::WalletStore;

// 지갑 레포지토리
// 역할: NestJS의 Repository 같은 것
// WalletRepository: handles all database operations for wallets

pub struct WalletRepository {
    pool: PgPool,
}

impl WalletRepository {
    // 레포지토리 생성
    // Create repository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn wallet_from_row(row: &PgRow) -> Wallet {
        Wallet {
            id: row.get("id"),
            public_key: row.get("public_key"),
            address: row.get("address"),
            created_at: row.get("created_at"),
            balance_sol: row.get("balance_sol"),
            balance_usdc: row.get("balance_usdc"),
            balance_slt: row.get("balance_slt"),
        }
    }
}

#[async_trait]
impl WalletStore for WalletRepository {
    // Public Key로 지갑 조회
    // Get wallet by public key
    async fn find_by_public_key(&self, public_key: &str) -> Result<Option<Wallet>> {
        let row = sqlx::query(
            r#"
            SELECT id, public_key, address, created_at, balance_sol, balance_usdc, balance_slt
            FROM wallets
            WHERE public_key = $1
            "#,
        )
        .bind(public_key)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch wallet by public_key")?;

        Ok(row.as_ref().map(Self::wallet_from_row))
    }

    // 지갑 생성 (이미 있으면 기존 지갑 반환)
    // Create wallet, or return the existing one (UNIQUE(public_key))
    async fn insert_if_absent(&self, wallet: Wallet) -> Result<Wallet> {
        let inserted = sqlx::query(
            r#"
            INSERT INTO wallets (id, public_key, address, created_at, balance_sol, balance_usdc, balance_slt)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (public_key) DO NOTHING
            RETURNING id, public_key, address, created_at, balance_sol, balance_usdc, balance_slt
            "#,
        )
        .bind(&wallet.id)
        .bind(&wallet.public_key)
        .bind(&wallet.address)
        .bind(wallet.created_at)
        .bind(wallet.balance_sol)
        .bind(wallet.balance_usdc)
        .bind(wallet.balance_slt)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to insert wallet")?;

        if let Some(row) = inserted {
            return Ok(Self::wallet_from_row(&row));
        }

        // 충돌: 다른 요청이 먼저 저장함
        self.find_by_public_key(&wallet.public_key)
            .await?
            .with_context(|| format!("Wallet disappeared after conflict: {}", wallet.public_key))
    }

    // SLT 잔액 증가 (단일 UPDATE, 문서 단위 원자적)
    // Increment SLT balance with a single UPDATE
    async fn increment_slt(&self, public_key: &str, amount: f64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE wallets
            SET balance_slt = balance_slt + $1
            WHERE public_key = $2
            "#,
        )
        .bind(amount)
        .bind(public_key)
        .execute(&self.pool)
        .await
        .context("Failed to increment SLT balance")?;

        Ok(result.rows_affected() > 0)
    }

    // 지갑이 없으면 생성하고 SLT 잔액 증가
    // Upsert wallet and increment SLT balance
    async fn upsert_increment_slt(&self, public_key: &str, amount: f64) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO wallets (id, public_key, address, created_at, balance_sol, balance_usdc, balance_slt)
            VALUES ($1, $2, $2, $3, 0, 0, $4)
            ON CONFLICT (public_key)
            DO UPDATE SET balance_slt = wallets.balance_slt + EXCLUDED.balance_slt
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(public_key)
        .bind(Utc::now())
        .bind(amount)
        .execute(&self.pool)
        .await
        .context("Failed to upsert SLT balance")?;

        Ok(())
    }
}
