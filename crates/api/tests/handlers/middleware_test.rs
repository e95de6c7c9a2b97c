use axum::http::StatusCode;
use axum::response::IntoResponse;
use pretty_assertions::assert_eq;
use tutormatch_api::middleware::error_handling::AppError;
use tutormatch_core::errors::AvailabilityError;

fn status_for(error: AvailabilityError) -> StatusCode {
    AppError(error).into_response().status()
}

#[test]
fn test_error_to_status_mapping() {
    assert_eq!(
        status_for(AvailabilityError::NotFound("Profile not found".to_string())),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        status_for(AvailabilityError::MissingField("day_of_week")),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        status_for(AvailabilityError::InvalidTimeOrder {
            start: "10:00".to_string(),
            end: "09:00".to_string(),
        }),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        status_for(AvailabilityError::MalformedTime("bad".to_string())),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        status_for(AvailabilityError::Validation("bad day".to_string())),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        status_for(AvailabilityError::CapacityExceeded { max: 20 }),
        StatusCode::CONFLICT
    );
    assert_eq!(
        status_for(AvailabilityError::Database(eyre::eyre!("down"))),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_domain_error_converts_into_app_error() {
    let error: AppError = AvailabilityError::CapacityExceeded { max: 20 }.into();
    assert!(matches!(
        error.0,
        AvailabilityError::CapacityExceeded { max: 20 }
    ));

    let error: AppError = eyre::eyre!("down").into();
    assert!(matches!(error.0, AvailabilityError::Database(_)));
}
