use eyre::Result;
use sqlx::{Pool, Sqlite};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Sqlite>) -> Result<()> {
    info!("Initializing database schema...");

    // Create profiles table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            id TEXT PRIMARY KEY,
            display_name TEXT NOT NULL,
            role TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create availability_slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS availability_slots (
            id TEXT PRIMARY KEY,
            profile_id TEXT NOT NULL REFERENCES profiles(id),
            day_of_week TEXT NOT NULL,
            start_minute INTEGER NOT NULL,
            end_minute INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            CONSTRAINT valid_time_range CHECK (end_minute > start_minute)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes (SQLite prepares one statement per query)
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_availability_slots_profile_id
         ON availability_slots(profile_id);",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_availability_slots_day_of_week
         ON availability_slots(day_of_week);",
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
