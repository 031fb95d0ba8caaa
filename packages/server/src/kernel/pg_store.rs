use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::BaseCredentialStore;
use crate::domains::auth::models::{Coordinator, Member};

/// Postgres-backed credential store
///
/// One row per coordinator and per member, keyed by phone number. Queries are
/// plain `query_as` against the migration-managed tables.
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseCredentialStore for PgCredentialStore {
    async fn find_coordinator_by_phone(&self, phone_number: &str) -> Result<Option<Coordinator>> {
        sqlx::query_as::<_, Coordinator>("SELECT * FROM coordinators WHERE phone_number = $1")
            .bind(phone_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn find_coordinator_by_project(&self, project_name: &str) -> Result<Option<Coordinator>> {
        sqlx::query_as::<_, Coordinator>("SELECT * FROM coordinators WHERE project_name = $1")
            .bind(project_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn find_project_by_coordinator_phone(
        &self,
        phone_number: &str,
    ) -> Result<Option<String>> {
        let project: Option<(String,)> =
            sqlx::query_as("SELECT project_name FROM coordinators WHERE phone_number = $1")
                .bind(phone_number)
                .fetch_optional(&self.pool)
                .await?;
        Ok(project.map(|(name,)| name))
    }

    async fn save_coordinator(&self, coordinator: &Coordinator) -> Result<()> {
        sqlx::query(
            "INSERT INTO coordinators (phone_number, project_name, token, created_at)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (phone_number) DO UPDATE
             SET project_name = EXCLUDED.project_name,
                 token = EXCLUDED.token,
                 created_at = EXCLUDED.created_at",
        )
        .bind(&coordinator.phone_number)
        .bind(&coordinator.project_name)
        .bind(&coordinator.token)
        .bind(coordinator.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_coordinator_by_phone(&self, phone_number: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM coordinators WHERE phone_number = $1")
            .bind(phone_number)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_member_by_phone(&self, phone_number: &str) -> Result<Option<Member>> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE phone_number = $1")
            .bind(phone_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn save_member(&self, member: &Member) -> Result<()> {
        // Members are insert-only; a duplicate phone is rejected by the
        // delegation flow before this point and by the primary key here
        sqlx::query(
            "INSERT INTO members (phone_number, token, coordinator_phone, project_name, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&member.phone_number)
        .bind(&member.token)
        .bind(&member.coordinator_phone)
        .bind(&member.project_name)
        .bind(member.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
