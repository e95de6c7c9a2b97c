//! # Availability Handlers
//!
//! Handlers for managing a profile's recurring weekly availability. Each
//! request loads the profile's slot collection from the store, applies the
//! pure schedule operation from `tutormatch-core`, and persists the
//! outcome, so the domain rules (field validation, time ordering, the slot
//! capacity) live in exactly one place.
//!
//! The collection is loaded fresh per request; concurrent writers to the
//! same profile are serialized by the caller, not here.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tutormatch_core::{
    errors::AvailabilityError,
    models::{
        availability::{
            AddSlotResponse, DayGroupResponse, GetAvailabilityResponse, RemoveSlotResponse,
            SlotCandidate, SlotResponse,
        },
        TimeOfDay, WeeklySlot,
    },
    schedule::WeeklySchedule,
};
use tutormatch_db::models::DbAvailabilitySlot;
use uuid::Uuid;

use crate::{handlers::profile::require_profile, middleware::error_handling::AppError, ApiState};

fn time_from_row(value: i64) -> Result<TimeOfDay, AvailabilityError> {
    let minutes = u16::try_from(value).map_err(|_| {
        AvailabilityError::MalformedTime(format!("{value} is not a valid minute offset"))
    })?;
    TimeOfDay::from_minutes(minutes)
}

fn slot_from_row(row: DbAvailabilitySlot) -> Result<WeeklySlot, AvailabilityError> {
    Ok(WeeklySlot {
        id: row.id,
        day_of_week: row.day_of_week.parse()?,
        start_time: time_from_row(row.start_minute)?,
        end_time: time_from_row(row.end_minute)?,
        created_at: row.created_at,
    })
}

/// Loads a profile's persisted slots into a schedule governed by the
/// configured policy.
async fn load_schedule(state: &ApiState, profile_id: Uuid) -> Result<WeeklySchedule, AppError> {
    let rows =
        tutormatch_db::repositories::slot::get_slots_by_profile_id(&state.db_pool, profile_id)
            .await
            .map_err(AvailabilityError::Database)?;

    let slots = rows
        .into_iter()
        .map(slot_from_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(WeeklySchedule::from_slots(slots, state.policy.clone()))
}

fn day_groups(schedule: &WeeklySchedule) -> Vec<DayGroupResponse> {
    schedule
        .group_by_day()
        .into_iter()
        .map(|(day, slots)| DayGroupResponse {
            day,
            slots: slots.into_iter().map(SlotResponse::from_slot).collect(),
        })
        .collect()
}

/// Returns the per-day grouped view of a profile's availability. Days
/// without slots are absent; slots within a day are sorted by start time.
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetAvailabilityResponse>, AppError> {
    require_profile(&state, id).await?;
    let schedule = load_schedule(&state, id).await?;

    let response = GetAvailabilityResponse {
        profile_id: id,
        slot_count: schedule.len(),
        capacity: schedule.capacity(),
        days: day_groups(&schedule),
    };

    Ok(Json(response))
}

/// Validates and appends one slot to a profile's schedule.
#[axum::debug_handler]
pub async fn add_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SlotCandidate>,
) -> Result<Json<AddSlotResponse>, AppError> {
    require_profile(&state, id).await?;

    let mut schedule = load_schedule(&state, id).await?;
    let created = schedule.add_slot(&payload)?;

    tutormatch_db::repositories::slot::insert_slot(
        &state.db_pool,
        id,
        created.id,
        created.day_of_week.as_str(),
        i64::from(created.start_time.as_minutes()),
        i64::from(created.end_time.as_minutes()),
        created.created_at,
    )
    .await
    .map_err(AvailabilityError::Database)?;

    let response = AddSlotResponse {
        profile_id: id,
        slot: SlotResponse::from_slot(&created),
        slot_count: schedule.len(),
        capacity: schedule.capacity(),
    };

    Ok(Json(response))
}

/// Removes one slot by id. Removing an id that does not exist succeeds
/// with the collection unchanged, matching the schedule's filter
/// semantics.
#[axum::debug_handler]
pub async fn remove_slot(
    State(state): State<Arc<ApiState>>,
    Path((id, slot_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<RemoveSlotResponse>, AppError> {
    require_profile(&state, id).await?;

    tutormatch_db::repositories::slot::delete_slot(&state.db_pool, id, slot_id)
        .await
        .map_err(AvailabilityError::Database)?;

    let schedule = load_schedule(&state, id).await?;

    let response = RemoveSlotResponse {
        profile_id: id,
        slot_count: schedule.len(),
    };

    Ok(Json(response))
}
