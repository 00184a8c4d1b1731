//! PostgreSQL implementation of ApplicationRepository
//!
//! Inserts and approvals lock the parent event row (`SELECT ... FOR UPDATE`)
//! so the approved-count check and the write happen as one step per event.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, instrument};

use eventboard_core::entities::{ApplicationReview, ApplicationStatus, EventApplication};
use eventboard_core::error::DomainError;
use eventboard_core::traits::{ApplicationRepository, RepoResult};
use eventboard_core::value_objects::{Page, Snowflake};

use crate::mappers::applications_from_models;
use crate::models::{ApplicationModel, APPLICATION_COLUMNS};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ApplicationRepository
#[derive(Clone)]
pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lock a live, published event for the rest of the transaction and
    /// return its capacity as stored under that lock.
    async fn lock_open_event(
        tx: &mut Transaction<'_, Postgres>,
        event_id: Snowflake,
    ) -> RepoResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r"
            SELECT capacity FROM events
            WHERE id = $1 AND is_deleted = FALSE AND status = 'PUBLISHED'
            FOR UPDATE
            ",
        )
        .bind(event_id.into_inner())
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::EventNotFound(event_id))
    }

    /// Lock a live event regardless of status; reviews happen on published
    /// and canceled events alike.
    async fn lock_live_event(
        tx: &mut Transaction<'_, Postgres>,
        event_id: Snowflake,
    ) -> RepoResult<i32> {
        sqlx::query_scalar::<_, i32>(
            "SELECT capacity FROM events WHERE id = $1 AND is_deleted = FALSE FOR UPDATE",
        )
        .bind(event_id.into_inner())
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::EventNotFound(event_id))
    }

    async fn approved_count(
        tx: &mut Transaction<'_, Postgres>,
        event_id: Snowflake,
    ) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM event_applications
            WHERE event_id = $1 AND status = 'APPROVED'
            ",
        )
        .bind(event_id.into_inner())
        .fetch_one(&mut **tx)
        .await
        .map_err(map_db_error)
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<EventApplication>> {
        let row = sqlx::query_as::<_, ApplicationModel>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM event_applications WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(EventApplication::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_event_and_user(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<EventApplication>> {
        let row = sqlx::query_as::<_, ApplicationModel>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM event_applications \
             WHERE event_id = $1 AND user_id = $2"
        ))
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(EventApplication::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_event(
        &self,
        event_id: Snowflake,
        page: Option<Page>,
    ) -> RepoResult<Vec<EventApplication>> {
        let (limit, offset) = page.map_or((None, 0), |p| (Some(p.limit_i64()), p.offset()));

        let rows = sqlx::query_as::<_, ApplicationModel>(&format!(
            r"
            SELECT {APPLICATION_COLUMNS}
            FROM event_applications
            WHERE event_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "
        ))
        .bind(event_id.into_inner())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        applications_from_models(rows)
    }

    #[instrument(skip(self))]
    async fn count_approved(&self, event_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM event_applications
            WHERE event_id = $1 AND status = 'APPROVED'
            ",
        )
        .bind(event_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(
        skip(self, application),
        fields(event_id = %application.event_id, user_id = %application.user_id)
    )]
    async fn apply_within_capacity(&self, application: &EventApplication) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let capacity = Self::lock_open_event(&mut tx, application.event_id).await?;

        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM event_applications WHERE event_id = $1 AND user_id = $2)
            ",
        )
        .bind(application.event_id.into_inner())
        .bind(application.user_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;
        if exists {
            return Err(DomainError::AlreadyRegistered);
        }

        let approved = Self::approved_count(&mut tx, application.event_id).await?;
        if approved >= i64::from(capacity) {
            debug!(approved, capacity, "event full");
            return Err(DomainError::CapacityReached);
        }

        sqlx::query(
            r"
            INSERT INTO event_applications (id, event_id, user_id, status, applied_at, reviewed_at, reviewed_by_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(application.id.into_inner())
        .bind(application.event_id.into_inner())
        .bind(application.user_id.into_inner())
        .bind(application.status.as_str())
        .bind(application.applied_at)
        .bind(application.reviewed_at)
        .bind(application.reviewed_by_id.map(Snowflake::into_inner))
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyRegistered))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, application, review), fields(application_id = %application.id, status = %review.status))]
    async fn review(
        &self,
        application: &EventApplication,
        review: ApplicationReview,
    ) -> RepoResult<EventApplication> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if review.status == ApplicationStatus::Approved {
            let capacity = Self::lock_live_event(&mut tx, application.event_id).await?;

            let approved = Self::approved_count(&mut tx, application.event_id).await?;
            if approved >= i64::from(capacity) {
                return Err(DomainError::CapacityReached);
            }
        }

        let row = sqlx::query_as::<_, ApplicationModel>(&format!(
            r"
            UPDATE event_applications
            SET status = $3, reviewed_at = $4, reviewed_by_id = $5
            WHERE id = $1 AND status = $2
            RETURNING {APPLICATION_COLUMNS}
            "
        ))
        .bind(application.id.into_inner())
        .bind(application.status.as_str())
        .bind(review.status.as_str())
        .bind(review.reviewed_at)
        .bind(review.reviewer_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(row) = row else {
            return Err(DomainError::ApplicationModified);
        };

        tx.commit().await.map_err(map_db_error)?;

        EventApplication::try_from(row)
    }

    #[instrument(skip(self))]
    async fn delete_by_event_and_user(
        &self,
        event_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM event_applications WHERE event_id = $1 AND user_id = $2
            ",
        )
        .bind(event_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
