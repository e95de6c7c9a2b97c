use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Sqlite};
use uuid::Uuid;

use crate::models::DbProfile;

pub async fn create_profile(
    pool: &Pool<Sqlite>,
    display_name: &str,
    role: &str,
) -> Result<DbProfile> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let profile = sqlx::query_as::<_, DbProfile>(
        r#"
        INSERT INTO profiles (id, display_name, role, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, display_name, role, created_at
        "#,
    )
    .bind(id)
    .bind(display_name)
    .bind(role)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(profile)
}

pub async fn get_profile_by_id(pool: &Pool<Sqlite>, id: Uuid) -> Result<Option<DbProfile>> {
    let profile = sqlx::query_as::<_, DbProfile>(
        r#"
        SELECT id, display_name, role, created_at
        FROM profiles
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}
