use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_metrics, health_check};

pub fn init_system_router() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(get_metrics))
        .route("/health", get(health_check))
}
