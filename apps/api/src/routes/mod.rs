pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::credits::handlers as credit_handlers;
use crate::report::handlers as report_handlers;
use crate::state::AppState;

/// Room for multipart boundaries, part headers and the email field.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_contract_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/hello", post(credit_handlers::handle_hello))
        .route(
            "/generate_markdown",
            post(report_handlers::handle_generate_markdown),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
