use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Sqlite};
use uuid::Uuid;

use crate::models::DbAvailabilitySlot;

/// Persists one slot. The id and creation timestamp are assigned by the
/// domain layer when the slot is validated, so they arrive as parameters
/// rather than being generated here.
pub async fn insert_slot(
    pool: &Pool<Sqlite>,
    profile_id: Uuid,
    id: Uuid,
    day_of_week: &str,
    start_minute: i64,
    end_minute: i64,
    created_at: DateTime<Utc>,
) -> Result<DbAvailabilitySlot> {
    let slot = sqlx::query_as::<_, DbAvailabilitySlot>(
        r#"
        INSERT INTO availability_slots (id, profile_id, day_of_week, start_minute, end_minute, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, profile_id, day_of_week, start_minute, end_minute, created_at
        "#,
    )
    .bind(id)
    .bind(profile_id)
    .bind(day_of_week)
    .bind(start_minute)
    .bind(end_minute)
    .bind(created_at)
    .fetch_one(pool)
    .await?;

    Ok(slot)
}

/// Fetches a profile's slots in insertion order, which is the collection's
/// storage order; grouping and per-day sorting happen in the domain layer.
pub async fn get_slots_by_profile_id(
    pool: &Pool<Sqlite>,
    profile_id: Uuid,
) -> Result<Vec<DbAvailabilitySlot>> {
    let slots = sqlx::query_as::<_, DbAvailabilitySlot>(
        r#"
        SELECT id, profile_id, day_of_week, start_minute, end_minute, created_at
        FROM availability_slots
        WHERE profile_id = ?
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(profile_id)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

/// Deletes one slot and reports how many rows went away. Zero is not an
/// error; deleting an absent id is a no-op.
pub async fn delete_slot(pool: &Pool<Sqlite>, profile_id: Uuid, slot_id: Uuid) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM availability_slots
        WHERE id = ? AND profile_id = ?
        "#,
    )
    .bind(slot_id)
    .bind(profile_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_slots_by_profile_id(pool: &Pool<Sqlite>, profile_id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM availability_slots
        WHERE profile_id = ?
        "#,
    )
    .bind(profile_id)
    .execute(pool)
    .await?;

    Ok(())
}
