use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tutormatch_core::{
    errors::AvailabilityError,
    models::profile::{CreateProfileRequest, CreateProfileResponse, GetProfileResponse},
    schedule::WeeklySchedule,
};
use tutormatch_db::models::DbProfile;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

pub(crate) async fn require_profile(state: &ApiState, id: Uuid) -> Result<DbProfile, AppError> {
    let profile = tutormatch_db::repositories::profile::get_profile_by_id(&state.db_pool, id)
        .await
        .map_err(AvailabilityError::Database)?
        .ok_or_else(|| AvailabilityError::NotFound(format!("Profile with ID {id} not found")))?;

    Ok(profile)
}

#[axum::debug_handler]
pub async fn create_profile(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateProfileRequest>,
) -> Result<Json<CreateProfileResponse>, AppError> {
    let display_name = payload.display_name.trim();
    if display_name.is_empty() {
        return Err(AppError(AvailabilityError::MissingField("display_name")));
    }

    // Validate every initial slot before any row is written, so a bad
    // candidate cannot leave a partial collection behind.
    let mut schedule = WeeklySchedule::new(state.policy.clone());
    let mut created_slots = Vec::with_capacity(payload.slots.len());
    for candidate in &payload.slots {
        created_slots.push(schedule.add_slot(candidate)?);
    }

    // Create profile in database
    let db_profile = tutormatch_db::repositories::profile::create_profile(
        &state.db_pool,
        display_name,
        payload.role.as_str(),
    )
    .await
    .map_err(AvailabilityError::Database)?;

    // Persist initial slots if provided
    for slot in &created_slots {
        tutormatch_db::repositories::slot::insert_slot(
            &state.db_pool,
            db_profile.id,
            slot.id,
            slot.day_of_week.as_str(),
            i64::from(slot.start_time.as_minutes()),
            i64::from(slot.end_time.as_minutes()),
            slot.created_at,
        )
        .await
        .map_err(AvailabilityError::Database)?;
    }

    let response = CreateProfileResponse {
        id: db_profile.id,
        display_name: db_profile.display_name,
        role: payload.role,
        created_at: db_profile.created_at,
        slot_count: created_slots.len(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_profile(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetProfileResponse>, AppError> {
    let db_profile = require_profile(&state, id).await?;

    let slots = tutormatch_db::repositories::slot::get_slots_by_profile_id(&state.db_pool, id)
        .await
        .map_err(AvailabilityError::Database)?;

    let response = GetProfileResponse {
        id: db_profile.id,
        display_name: db_profile.display_name,
        role: db_profile.role.parse()?,
        created_at: db_profile.created_at,
        slot_count: slots.len(),
    };

    Ok(Json(response))
}
