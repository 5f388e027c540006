use crate::{
    ApiError, AppState, create_user, delete_user, get_user, health, list_users, update_user,
};

use std::panic::Location;

use axum::{Router, http::Uri, routing::get};
use error_location::ErrorLocation;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // User resource
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .fallback(route_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Browser clients are served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        message: format!("No route for {}", uri.path()),
        location: ErrorLocation::from(Location::caller()),
    }
}
