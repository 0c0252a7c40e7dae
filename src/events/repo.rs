use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

use crate::events::validate::NewEvent;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "crate::events::datetime")]
    pub start_time: PrimitiveDateTime,
    #[serde(with = "crate::events::datetime")]
    pub end_time: PrimitiveDateTime,
    pub reminder: bool,
    #[serde(default, with = "crate::events::datetime::option")]
    pub reminder_time: Option<PrimitiveDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Event {
    /// Store a validated event for its owner.
    pub async fn create(db: &PgPool, owner_id: Uuid, new: NewEvent) -> anyhow::Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (user_id, title, description, start_time, end_time, reminder, reminder_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, title, description, start_time, end_time, reminder, reminder_time, created_at
            "#,
        )
        .bind(owner_id)
        .bind(new.title)
        .bind(new.description)
        .bind(new.start_time)
        .bind(new.end_time)
        .bind(new.reminder)
        .bind(new.reminder_time)
        .fetch_one(db)
        .await?;
        Ok(event)
    }

    /// All events for one owner, earliest start first.
    pub async fn list_by_owner(db: &PgPool, owner_id: Uuid) -> anyhow::Result<Vec<Event>> {
        let rows = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, user_id, title, description, start_time, end_time, reminder, reminder_time, created_at
            FROM events
            WHERE user_id = $1
            ORDER BY start_time ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Replace the mutable fields of an owned event. `None` when no event
    /// with that id belongs to the owner; a foreign event is
    /// indistinguishable from a missing one.
    pub async fn update_by_owner(
        db: &PgPool,
        owner_id: Uuid,
        event_id: Uuid,
        new: NewEvent,
    ) -> anyhow::Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET title = $3, description = $4, start_time = $5, end_time = $6,
                reminder = $7, reminder_time = $8
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, description, start_time, end_time, reminder, reminder_time, created_at
            "#,
        )
        .bind(event_id)
        .bind(owner_id)
        .bind(new.title)
        .bind(new.description)
        .bind(new.start_time)
        .bind(new.end_time)
        .bind(new.reminder)
        .bind(new.reminder_time)
        .fetch_optional(db)
        .await?;
        Ok(event)
    }

    /// Remove an owned event. `false` when nothing matched.
    pub async fn delete_by_owner(
        db: &PgPool,
        owner_id: Uuid,
        event_id: Uuid,
    ) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM events
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(event_id)
        .bind(owner_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
