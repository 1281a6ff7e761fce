use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::handlers;
use super::handlers::probes::healthz;
use super::handlers::ui::home;
use super::state::AppState;

pub fn build_routes(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/healthz", get(healthz))
        .route(
            "/api/jobs",
            get(handlers::jobs::list).post(handlers::jobs::create),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
