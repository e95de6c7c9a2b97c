use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{DayOfWeek, TimeOfDay, WeeklySlot};

/// A slot as submitted by a client, before validation.
///
/// All three fields are optional raw strings so that an incomplete or
/// malformed submission reaches the validator and gets a specific rejection
/// reason instead of failing at deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotCandidate {
    #[serde(default)]
    pub day_of_week: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

impl SlotCandidate {
    pub fn new(day_of_week: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            day_of_week: Some(day_of_week.to_string()),
            start_time: Some(start_time.to_string()),
            end_time: Some(end_time.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    pub id: Uuid,
    pub day_of_week: DayOfWeek,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    /// Human-readable 12-hour range, e.g. `"9:00 AM - 10:30 AM"`.
    pub display: String,
}

impl SlotResponse {
    pub fn from_slot(slot: &WeeklySlot) -> Self {
        Self {
            id: slot.id,
            day_of_week: slot.day_of_week,
            start_time: slot.start_time,
            end_time: slot.end_time,
            display: format!(
                "{} - {}",
                slot.start_time.display_12h(),
                slot.end_time.display_12h()
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayGroupResponse {
    pub day: DayOfWeek,
    pub slots: Vec<SlotResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAvailabilityResponse {
    pub profile_id: Uuid,
    pub slot_count: usize,
    pub capacity: usize,
    pub days: Vec<DayGroupResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSlotResponse {
    pub profile_id: Uuid,
    pub slot: SlotResponse,
    pub slot_count: usize,
    pub capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveSlotResponse {
    pub profile_id: Uuid,
    pub slot_count: usize,
}
