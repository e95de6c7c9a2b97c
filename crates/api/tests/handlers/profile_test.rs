use axum::extract::{Path, State};
use axum::Json;
use pretty_assertions::assert_eq;
use tutormatch_api::handlers;
use tutormatch_core::errors::AvailabilityError;
use tutormatch_core::models::availability::SlotCandidate;
use tutormatch_core::models::profile::{CreateProfileRequest, ProfileRole};
use uuid::Uuid;

use crate::test_utils::test_state;

#[tokio::test]
async fn test_create_profile_without_slots() {
    let state = test_state().await;

    let Json(response) = handlers::profile::create_profile(
        State(state.clone()),
        Json(CreateProfileRequest {
            display_name: "Ada Lovelace".to_string(),
            role: ProfileRole::Tutor,
            slots: vec![],
        }),
    )
    .await
    .expect("Failed to create profile");

    assert_eq!(response.display_name, "Ada Lovelace");
    assert_eq!(response.role, ProfileRole::Tutor);
    assert_eq!(response.slot_count, 0);

    let Json(fetched) = handlers::profile::get_profile(State(state), Path(response.id))
        .await
        .expect("Failed to fetch profile");

    assert_eq!(fetched.id, response.id);
    assert_eq!(fetched.display_name, "Ada Lovelace");
    assert_eq!(fetched.role, ProfileRole::Tutor);
    assert_eq!(fetched.slot_count, 0);
}

#[tokio::test]
async fn test_create_profile_with_initial_slots() {
    let state = test_state().await;

    let Json(response) = handlers::profile::create_profile(
        State(state.clone()),
        Json(CreateProfileRequest {
            display_name: "Grace Hopper".to_string(),
            role: ProfileRole::Student,
            slots: vec![
                SlotCandidate::new("Monday", "09:00", "10:00"),
                SlotCandidate::new("Friday", "15:30", "17:00"),
            ],
        }),
    )
    .await
    .expect("Failed to create profile");

    assert_eq!(response.slot_count, 2);

    let Json(availability) =
        handlers::availability::get_availability(State(state), Path(response.id))
            .await
            .expect("Failed to fetch availability");

    assert_eq!(availability.slot_count, 2);
    assert_eq!(availability.days.len(), 2);
}

#[tokio::test]
async fn test_create_profile_rejects_invalid_initial_slot() {
    let state = test_state().await;

    let error = handlers::profile::create_profile(
        State(state),
        Json(CreateProfileRequest {
            display_name: "Grace Hopper".to_string(),
            role: ProfileRole::Tutor,
            slots: vec![SlotCandidate::new("Monday", "10:00", "09:00")],
        }),
    )
    .await
    .expect_err("Inverted slot should be rejected");

    assert!(matches!(
        error.0,
        AvailabilityError::InvalidTimeOrder { .. }
    ));
}

#[tokio::test]
async fn test_create_profile_rejects_blank_display_name() {
    let state = test_state().await;

    let error = handlers::profile::create_profile(
        State(state),
        Json(CreateProfileRequest {
            display_name: "   ".to_string(),
            role: ProfileRole::Tutor,
            slots: vec![],
        }),
    )
    .await
    .expect_err("Blank display name should be rejected");

    assert!(matches!(
        error.0,
        AvailabilityError::MissingField("display_name")
    ));
}

#[tokio::test]
async fn test_get_unknown_profile_is_not_found() {
    let state = test_state().await;

    let error = handlers::profile::get_profile(State(state), Path(Uuid::new_v4()))
        .await
        .expect_err("Unknown profile should be a NotFound error");

    assert!(matches!(error.0, AvailabilityError::NotFound(_)));
}
