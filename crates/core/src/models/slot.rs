use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{DayOfWeek, TimeOfDay};

/// One recurring weekly availability window.
///
/// Invariant: `start_time < end_time`. Slots are only constructed through
/// [`crate::schedule::WeeklySchedule::add_slot`], which enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySlot {
    pub id: Uuid,
    pub day_of_week: DayOfWeek,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub created_at: DateTime<Utc>,
}
