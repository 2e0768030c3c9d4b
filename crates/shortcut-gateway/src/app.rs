use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{create_url_handler, health_handler, resolve_url_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the gateway router. Static routes take precedence over the
    /// short-code capture, so `/health` stays reachable.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/shorten", post(create_url_handler))
            .route("/{short_code}", get(resolve_url_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
