use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::AppError;
use crate::models::audit::{EmailQuery, HelloResponse};
use crate::models::email::EmailAddress;
use crate::state::AppState;

/// POST /hello?email=...
///
/// Eligibility probe: runs only the credit check.
pub async fn handle_hello(
    State(state): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<HelloResponse>, AppError> {
    let email = EmailAddress::parse(&params.email)?;
    let eligible = state.credits.check_credits(&email).await?;
    Ok(Json(HelloResponse {
        hello_server: eligible,
    }))
}
