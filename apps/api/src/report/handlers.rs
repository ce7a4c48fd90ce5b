//! Axum route handlers for report generation.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;
use crate::models::audit::{AuditRequest, MarkdownReportResponse, OptionalEmailQuery};
use crate::models::email::EmailAddress;
use crate::report::pipeline::run_audit;
use crate::state::AppState;

const FILE_FIELD: &str = "file";
const EMAIL_FIELD: &str = "email";

/// POST /generate_markdown
///
/// Multipart upload with a `file` part. The email comes from the `email`
/// query parameter or, failing that, an `email` form part.
pub async fn handle_generate_markdown(
    State(state): State<AppState>,
    Query(params): Query<OptionalEmailQuery>,
    mut multipart: Multipart,
) -> Result<Json<MarkdownReportResponse>, AppError> {
    let mut file: Option<Bytes> = None;
    let mut form_email: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                debug!("Received upload {:?}", field.file_name());
                file = Some(field.bytes().await?);
            }
            Some(EMAIL_FIELD) => form_email = Some(field.text().await?),
            _ => {}
        }
    }

    let raw_email = params
        .email
        .or(form_email)
        .ok_or_else(|| AppError::Validation("email is required".to_string()))?;
    let email = EmailAddress::parse(&raw_email)?;
    let contract_source =
        file.ok_or_else(|| AppError::Validation("file is required".to_string()))?;

    let markdown_report = run_audit(
        &state,
        AuditRequest {
            email,
            contract_source,
        },
    )
    .await?;

    Ok(Json(MarkdownReportResponse { markdown_report }))
}
