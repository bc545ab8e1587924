pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/screenings", post(handlers::handle_screening))
        .route("/api/v1/results/download", get(handlers::handle_download))
        .route("/api/v1/results/:token", get(handlers::handle_results_view))
        .route("/api/v1/admin", post(handlers::handle_admin))
        .with_state(state)
}
