use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/profiles/:id/availability",
            get(handlers::availability::get_availability).post(handlers::availability::add_slot),
        )
        .route(
            "/api/profiles/:id/availability/:slot_id",
            delete(handlers::availability::remove_slot),
        )
}
