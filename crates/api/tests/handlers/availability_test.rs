use axum::extract::{Path, State};
use axum::Json;
use pretty_assertions::assert_eq;
use tutormatch_api::handlers;
use tutormatch_core::errors::AvailabilityError;
use tutormatch_core::models::availability::SlotCandidate;
use tutormatch_core::models::day::DayOfWeek;
use tutormatch_core::models::profile::{CreateProfileRequest, ProfileRole};
use tutormatch_core::schedule::SlotPolicy;
use uuid::Uuid;

use crate::test_utils::{test_state, test_state_with_policy};

async fn create_tutor(state: &std::sync::Arc<tutormatch_api::ApiState>) -> Uuid {
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

    response.id
}

#[tokio::test]
async fn test_add_slot_then_fetch_grouped_availability() {
    let state = test_state().await;
    let profile_id = create_tutor(&state).await;

    let Json(added) = handlers::availability::add_slot(
        State(state.clone()),
        Path(profile_id),
        Json(SlotCandidate::new("Monday", "09:00", "10:00")),
    )
    .await
    .expect("Failed to add slot");

    assert_eq!(added.profile_id, profile_id);
    assert_eq!(added.slot_count, 1);
    assert_eq!(added.capacity, 20);
    assert_eq!(added.slot.display, "9:00 AM - 10:00 AM");

    let Json(availability) =
        handlers::availability::get_availability(State(state), Path(profile_id))
            .await
            .expect("Failed to fetch availability");

    assert_eq!(availability.slot_count, 1);
    assert_eq!(availability.days.len(), 1);
    assert_eq!(availability.days[0].day, DayOfWeek::Monday);
    assert_eq!(availability.days[0].slots[0].id, added.slot.id);
}

#[tokio::test]
async fn test_grouped_view_sorts_days_and_slots() {
    let state = test_state().await;
    let profile_id = create_tutor(&state).await;

    // Added out of order on purpose.
    for (day, start, end) in [
        ("Wednesday", "08:00", "09:00"),
        ("Monday", "14:00", "15:00"),
        ("Monday", "09:00", "10:00"),
    ] {
        handlers::availability::add_slot(
            State(state.clone()),
            Path(profile_id),
            Json(SlotCandidate::new(day, start, end)),
        )
        .await
        .expect("Failed to add slot");
    }

    let Json(availability) =
        handlers::availability::get_availability(State(state), Path(profile_id))
            .await
            .expect("Failed to fetch availability");

    let days: Vec<DayOfWeek> = availability.days.iter().map(|group| group.day).collect();
    assert_eq!(days, vec![DayOfWeek::Monday, DayOfWeek::Wednesday]);

    let monday_starts: Vec<String> = availability.days[0]
        .slots
        .iter()
        .map(|slot| slot.start_time.to_string())
        .collect();
    assert_eq!(monday_starts, vec!["09:00", "14:00"]);
}

#[tokio::test]
async fn test_add_slot_rejects_inverted_times() {
    let state = test_state().await;
    let profile_id = create_tutor(&state).await;

    let error = handlers::availability::add_slot(
        State(state.clone()),
        Path(profile_id),
        Json(SlotCandidate::new("Monday", "10:00", "09:00")),
    )
    .await
    .expect_err("Inverted slot should be rejected");

    assert!(matches!(
        error.0,
        AvailabilityError::InvalidTimeOrder { .. }
    ));

    let Json(availability) =
        handlers::availability::get_availability(State(state), Path(profile_id))
            .await
            .unwrap();
    assert_eq!(availability.slot_count, 0);
}

#[tokio::test]
async fn test_add_slot_rejects_malformed_time() {
    let state = test_state().await;
    let profile_id = create_tutor(&state).await;

    let error = handlers::availability::add_slot(
        State(state),
        Path(profile_id),
        Json(SlotCandidate::new("Monday", "9am", "10:00")),
    )
    .await
    .expect_err("Malformed time should be rejected");

    assert!(matches!(error.0, AvailabilityError::MalformedTime(_)));
}

#[tokio::test]
async fn test_add_slot_beyond_capacity_is_rejected() {
    let policy = SlotPolicy {
        max_slots: 2,
        granularity_minutes: 30,
    };
    let state = test_state_with_policy(policy).await;
    let profile_id = create_tutor(&state).await;

    for (start, end) in [("09:00", "10:00"), ("10:00", "11:00")] {
        handlers::availability::add_slot(
            State(state.clone()),
            Path(profile_id),
            Json(SlotCandidate::new("Tuesday", start, end)),
        )
        .await
        .expect("Failed to add slot");
    }

    let error = handlers::availability::add_slot(
        State(state.clone()),
        Path(profile_id),
        Json(SlotCandidate::new("Tuesday", "11:00", "12:00")),
    )
    .await
    .expect_err("Slot beyond capacity should be rejected");

    assert!(matches!(
        error.0,
        AvailabilityError::CapacityExceeded { max: 2 }
    ));

    let Json(availability) =
        handlers::availability::get_availability(State(state), Path(profile_id))
            .await
            .unwrap();
    assert_eq!(availability.slot_count, 2);
}

#[tokio::test]
async fn test_identical_slots_are_kept_separately() {
    let state = test_state().await;
    let profile_id = create_tutor(&state).await;
    let candidate = SlotCandidate::new("Thursday", "13:00", "14:00");

    let Json(first) = handlers::availability::add_slot(
        State(state.clone()),
        Path(profile_id),
        Json(candidate.clone()),
    )
    .await
    .unwrap();
    let Json(second) =
        handlers::availability::add_slot(State(state.clone()), Path(profile_id), Json(candidate))
            .await
            .unwrap();

    assert_ne!(first.slot.id, second.slot.id);
    assert_eq!(second.slot_count, 2);
}

#[tokio::test]
async fn test_remove_slot_then_remove_again_is_a_noop() {
    let state = test_state().await;
    let profile_id = create_tutor(&state).await;

    let Json(added) = handlers::availability::add_slot(
        State(state.clone()),
        Path(profile_id),
        Json(SlotCandidate::new("Monday", "09:00", "10:00")),
    )
    .await
    .unwrap();

    let Json(removed) = handlers::availability::remove_slot(
        State(state.clone()),
        Path((profile_id, added.slot.id)),
    )
    .await
    .expect("Failed to remove slot");
    assert_eq!(removed.slot_count, 0);

    // Removing the same id again succeeds with the collection unchanged.
    let Json(removed_again) = handlers::availability::remove_slot(
        State(state.clone()),
        Path((profile_id, added.slot.id)),
    )
    .await
    .expect("Removing an absent slot should succeed");
    assert_eq!(removed_again.slot_count, 0);
}

#[tokio::test]
async fn test_availability_for_unknown_profile_is_not_found() {
    let state = test_state().await;

    let error = handlers::availability::get_availability(State(state.clone()), Path(Uuid::new_v4()))
        .await
        .expect_err("Unknown profile should be a NotFound error");
    assert!(matches!(error.0, AvailabilityError::NotFound(_)));

    let error = handlers::availability::add_slot(
        State(state),
        Path(Uuid::new_v4()),
        Json(SlotCandidate::new("Monday", "09:00", "10:00")),
    )
    .await
    .expect_err("Unknown profile should be a NotFound error");
    assert!(matches!(error.0, AvailabilityError::NotFound(_)));
}
