pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::preview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Layout catalogue
        .route("/api/v1/layouts", get(handlers::handle_list_layouts))
        .route("/api/v1/layouts/:name", get(handlers::handle_get_layout))
        // Render API
        .route("/api/v1/render", post(handlers::handle_render))
        .route("/api/v1/render/html", post(handlers::handle_render_html))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
