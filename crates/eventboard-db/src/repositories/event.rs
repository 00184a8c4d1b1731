//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};

use eventboard_core::entities::Event;
use eventboard_core::traits::{EventFilter, EventRepository, RepoResult};
use eventboard_core::value_objects::{Page, Snowflake};

use crate::mappers::events_from_models;
use crate::models::{EventModel, EVENT_COLUMNS};

use super::error::map_db_error;

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `LIMIT NULL` means no limit in PostgreSQL
fn limit_offset(page: Option<Page>) -> (Option<i64>, i64) {
    page.map_or((None, 0), |p| (Some(p.limit_i64()), p.offset()))
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Event>> {
        let row = sqlx::query_as::<_, EventModel>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Event::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: EventFilter, page: Option<Page>) -> RepoResult<Vec<Event>> {
        let (limit, offset) = limit_offset(page);

        let rows = sqlx::query_as::<_, EventModel>(&format!(
            r"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE is_deleted = FALSE
              AND ($1::TEXT IS NULL OR status = $1)
              AND ($2::BIGINT IS NULL OR creator_id = $2)
            ORDER BY id
            LIMIT $3 OFFSET $4
            "
        ))
        .bind(filter.status.map(|s| s.as_str()))
        .bind(filter.creator_id.map(Snowflake::into_inner))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        events_from_models(rows)
    }

    #[instrument(skip(self))]
    async fn list_deleted_by_creator(
        &self,
        creator_id: Snowflake,
        page: Option<Page>,
    ) -> RepoResult<Vec<Event>> {
        let (limit, offset) = limit_offset(page);

        let rows = sqlx::query_as::<_, EventModel>(&format!(
            r"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE is_deleted = TRUE AND creator_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "
        ))
        .bind(creator_id.into_inner())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        events_from_models(rows)
    }

    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn create(&self, event: &Event) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO events (id, name, description, location, virtual_link, is_virtual,
                                start_date, end_date, capacity, requires_approval, status,
                                creator_id, version, is_deleted, deleted_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            ",
        )
        .bind(event.id.into_inner())
        .bind(&event.name)
        .bind(&event.description)
        .bind(&event.location)
        .bind(&event.virtual_link)
        .bind(event.is_virtual)
        .bind(event.start_date)
        .bind(event.end_date)
        .bind(event.capacity)
        .bind(event.requires_approval)
        .bind(event.status.as_str())
        .bind(event.creator_id.into_inner())
        .bind(event.version)
        .bind(event.is_deleted)
        .bind(event.deleted_at)
        .bind(event.created_at)
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn update_versioned(&self, event: &Event, expected_version: i32) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE events
            SET name = $3, description = $4, location = $5, virtual_link = $6, is_virtual = $7,
                start_date = $8, end_date = $9, capacity = $10, requires_approval = $11,
                status = $12, updated_at = $13, version = version + 1
            WHERE id = $1 AND version = $2 AND is_deleted = FALSE
            ",
        )
        .bind(event.id.into_inner())
        .bind(expected_version)
        .bind(&event.name)
        .bind(&event.description)
        .bind(&event.location)
        .bind(&event.virtual_link)
        .bind(event.is_virtual)
        .bind(event.start_date)
        .bind(event.end_date)
        .bind(event.capacity)
        .bind(event.requires_approval)
        .bind(event.status.as_str())
        .bind(event.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        let applied = result.rows_affected() == 1;
        if !applied {
            debug!(expected_version, "versioned update matched no row");
        }
        Ok(applied)
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE events
            SET is_deleted = TRUE, deleted_at = $2, updated_at = $2, version = version + 1
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self))]
    async fn restore(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE events
            SET is_deleted = FALSE, deleted_at = NULL, updated_at = $2, version = version + 1
            WHERE id = $1 AND is_deleted = TRUE
            ",
        )
        .bind(id.into_inner())
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }
}
