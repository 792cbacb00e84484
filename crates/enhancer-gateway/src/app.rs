use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    enhance_handler, fallback_handler, health_handler, missing_key_handler, redirect_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/enhance", post(enhance_handler))
            .route("/enhanced", get(missing_key_handler))
            .route("/enhanced/", get(missing_key_handler))
            .route("/enhanced/{key}", get(redirect_handler))
            .fallback(fallback_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
