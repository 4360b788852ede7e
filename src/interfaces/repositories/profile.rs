use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::{postgres::PgRow, Row};
use uuid::Uuid;

use crate::{
    entities::profile::{ProfileInsert, StoredProfile},
    errors::AppError,
    repositories::sqlx_repo::SqlxProfileRepo,
};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Inserts a new profile document, returning its generated id
    async fn create_profile(&self, insert: &ProfileInsert) -> Result<Uuid, AppError>;

    /// Fetches one profile by id; `None` when absent
    async fn get_profile(&self, id: Uuid) -> Result<Option<StoredProfile>, AppError>;

    /// Returns every stored profile
    async fn list_profiles(&self) -> Result<Vec<StoredProfile>, AppError>;

    /// Shallow-merges the supplied fields into the stored document and
    /// advances updated_at; false when no row matched
    async fn update_profile(&self, id: Uuid, patch: &JsonValue) -> Result<bool, AppError>;

    /// Removes the document; false when no row matched
    async fn delete_profile(&self, id: Uuid) -> Result<bool, AppError>;

    /// Liveness probe used by the health endpoint
    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxProfileRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProfileRepo { pool }
    }

    fn row_to_stored_profile(row: PgRow) -> Result<StoredProfile, AppError> {
        let document: JsonValue = row.try_get("document")?;
        let profile = serde_json::from_value(document)
            .map_err(|e| AppError::StorageError(format!("Malformed profile document: {}", e)))?;

        Ok(StoredProfile {
            id: row.try_get("id")?,
            profile,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl ProfileRepository for SqlxProfileRepo {
    async fn create_profile(&self, insert: &ProfileInsert) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO profiles (id, document, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(insert.id)
        .bind(&insert.document)
        .bind(insert.created_at)
        .bind(insert.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get_profile(&self, id: Uuid) -> Result<Option<StoredProfile>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, document, created_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_stored_profile).transpose()
    }

    async fn list_profiles(&self) -> Result<Vec<StoredProfile>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT id, document, created_at, updated_at
            FROM profiles
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_stored_profile).collect()
    }

    async fn update_profile(&self, id: Uuid, patch: &JsonValue) -> Result<bool, AppError> {
        // `||` is a shallow merge: only the top-level keys present in the
        // patch are replaced, everything else is preserved.
        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET document = document || $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_profile(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
