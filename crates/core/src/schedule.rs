//! # Weekly Schedule Manager
//!
//! The caller-owned collection of recurring weekly slots and the operations
//! over it: candidate validation, bounded insertion, filter-style removal,
//! and the per-day grouping used by display surfaces.
//!
//! All operations are synchronous and local. Every failure is an input
//! error reported as an [`AvailabilityError`]; nothing here can fail
//! transiently, so nothing is retried. Mutations are atomic with respect to
//! the collection: a rejected candidate leaves it untouched.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::{AvailabilityError, AvailabilityResult};
use crate::models::{DayOfWeek, SlotCandidate, TimeOfDay, WeeklySlot};

/// Limits applied to one schedule, supplied by the embedding application.
#[derive(Debug, Clone)]
pub struct SlotPolicy {
    /// Maximum number of slots one profile may hold.
    pub max_slots: usize,
    /// Required alignment of slot times, in minutes. Values of 0 or 1
    /// accept any minute.
    pub granularity_minutes: u16,
}

impl Default for SlotPolicy {
    fn default() -> Self {
        Self {
            max_slots: 20,
            granularity_minutes: 30,
        }
    }
}

/// A profile's weekly availability: an insertion-ordered, bounded
/// collection of [`WeeklySlot`]s.
///
/// The schedule holds no storage of its own. Callers load slots from
/// wherever they persist them, apply mutations here, and write the result
/// back; every mutation is visible in the return value.
#[derive(Debug, Clone)]
pub struct WeeklySchedule {
    slots: Vec<WeeklySlot>,
    policy: SlotPolicy,
}

impl WeeklySchedule {
    /// Creates an empty schedule governed by `policy`.
    pub fn new(policy: SlotPolicy) -> Self {
        Self {
            slots: Vec::new(),
            policy,
        }
    }

    /// Wraps an existing slot list, e.g. one loaded from persistence.
    ///
    /// The slots are trusted as-is; they were validated when first added.
    pub fn from_slots(slots: Vec<WeeklySlot>, policy: SlotPolicy) -> Self {
        Self { slots, policy }
    }

    pub fn slots(&self) -> &[WeeklySlot] {
        &self.slots
    }

    pub fn into_slots(self) -> Vec<WeeklySlot> {
        self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.policy.max_slots
    }

    pub fn remaining_capacity(&self) -> usize {
        self.policy.max_slots.saturating_sub(self.slots.len())
    }

    /// Checks a candidate against the schedule without mutating anything.
    ///
    /// Checks run in a fixed order so the caller always sees the most
    /// fundamental problem first: field presence, field well-formedness,
    /// time order, then capacity.
    ///
    /// # Errors
    ///
    /// * [`AvailabilityError::MissingField`] - a field is absent or blank
    /// * [`AvailabilityError::Validation`] - the day is not a weekday name
    /// * [`AvailabilityError::MalformedTime`] - a time is unparseable or
    ///   off the configured granularity
    /// * [`AvailabilityError::InvalidTimeOrder`] - start is not before end
    /// * [`AvailabilityError::CapacityExceeded`] - the schedule is full
    pub fn validate_candidate(
        &self,
        candidate: &SlotCandidate,
    ) -> AvailabilityResult<(DayOfWeek, TimeOfDay, TimeOfDay)> {
        let day = require_field(candidate.day_of_week.as_deref(), "day_of_week")?;
        let start = require_field(candidate.start_time.as_deref(), "start_time")?;
        let end = require_field(candidate.end_time.as_deref(), "end_time")?;

        let day = DayOfWeek::from_str(day)?;
        let start = self.parse_aligned(start)?;
        let end = self.parse_aligned(end)?;

        if start >= end {
            return Err(AvailabilityError::InvalidTimeOrder {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        if self.slots.len() >= self.policy.max_slots {
            return Err(AvailabilityError::CapacityExceeded {
                max: self.policy.max_slots,
            });
        }

        Ok((day, start, end))
    }

    /// Validates `candidate` and appends it as a new slot with a fresh id.
    ///
    /// Exactly one slot is added per successful call. Identical candidates
    /// are not deduplicated: submitting the same window twice yields two
    /// slots with distinct ids, matching how profile owners expect repeated
    /// adds to behave.
    ///
    /// # Errors
    ///
    /// See [`Self::validate_candidate`]. The collection is unchanged on
    /// any error.
    pub fn add_slot(&mut self, candidate: &SlotCandidate) -> AvailabilityResult<WeeklySlot> {
        let (day_of_week, start_time, end_time) = self.validate_candidate(candidate)?;

        let slot = WeeklySlot {
            id: Uuid::new_v4(),
            day_of_week,
            start_time,
            end_time,
            created_at: Utc::now(),
        };
        self.slots.push(slot.clone());
        Ok(slot)
    }

    /// Removes the slot with `id`, returning it if it was present.
    ///
    /// Removing an id that is not in the collection is a no-op, not an
    /// error: the result is the same collection, and the caller receives
    /// `None`.
    pub fn remove_slot(&mut self, id: Uuid) -> Option<WeeklySlot> {
        let index = self.slots.iter().position(|slot| slot.id == id)?;
        Some(self.slots.remove(index))
    }

    /// Groups slots per day for display.
    ///
    /// Only days that hold at least one slot appear as keys; each day's
    /// slots are sorted ascending by start time. Keys iterate Monday
    /// through Sunday. Pure: the collection itself keeps insertion order.
    pub fn group_by_day(&self) -> BTreeMap<DayOfWeek, Vec<&WeeklySlot>> {
        let mut grouped: BTreeMap<DayOfWeek, Vec<&WeeklySlot>> = BTreeMap::new();
        for slot in &self.slots {
            grouped.entry(slot.day_of_week).or_default().push(slot);
        }
        for slots in grouped.values_mut() {
            slots.sort_by_key(|slot| slot.start_time);
        }
        grouped
    }

    fn parse_aligned(&self, raw: &str) -> AvailabilityResult<TimeOfDay> {
        let time = TimeOfDay::from_str(raw)?;
        let granularity = self.policy.granularity_minutes;
        if granularity > 1 && time.as_minutes() % granularity != 0 {
            return Err(AvailabilityError::MalformedTime(format!(
                "{time} is not aligned to {granularity}-minute steps"
            )));
        }
        Ok(time)
    }
}

fn require_field<'a>(
    value: Option<&'a str>,
    name: &'static str,
) -> AvailabilityResult<&'a str> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(AvailabilityError::MissingField(name))
}
