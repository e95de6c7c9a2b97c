use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProfile {
    pub id: Uuid,
    pub display_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// A persisted weekly slot. Times are stored as integer minutes since
/// midnight; the day as its full English name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAvailabilitySlot {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub day_of_week: String,
    pub start_minute: i64,
    pub end_minute: i64,
    pub created_at: DateTime<Utc>,
}
