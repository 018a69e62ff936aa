use crate::entities::AnalysisRecord;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

/// Keyed append/read/delete storage for analysis records. Backed by Postgres
/// in production; tests substitute an in-memory fake.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    async fn insert(&self, record: &AnalysisRecord) -> Result<()>;

    /// Up to `limit` most recent records, newest first.
    async fn recent(&self, limit: i64) -> Result<Vec<AnalysisRecord>>;

    /// Returns whether a record with that id existed and was removed.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// Postgres-backed store. The full record is kept as a JSONB payload
/// (timestamps as RFC 3339 strings, rehydrated by serde on read) with the
/// creation timestamp duplicated into a column for ordering.
#[derive(Clone)]
pub struct PgAnalysisStore {
    pool: Pool<Postgres>,
}

impl PgAnalysisStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalysisStore for PgAnalysisStore {
    async fn insert(&self, record: &AnalysisRecord) -> Result<()> {
        let payload = serde_json::to_value(record)?;
        sqlx::query("INSERT INTO analyses (id, record, created_at) VALUES ($1, $2, $3)")
            .bind(record.id)
            .bind(payload)
            .bind(record.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<AnalysisRecord>> {
        let rows = sqlx::query("SELECT record FROM analyses ORDER BY created_at DESC LIMIT $1")
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let payload: serde_json::Value = row.try_get("record")?;
            records.push(serde_json::from_value(payload)?);
        }
        Ok(records)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM analyses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
