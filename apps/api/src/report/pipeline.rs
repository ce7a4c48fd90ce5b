//! Audit pipeline: credit check → ingest → generate → format.
//!
//! Every stage is sequential and any failure aborts the request. Nothing is
//! persisted between stages.

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::audit::AuditRequest;
use crate::report::formatter::format_report;
use crate::report::generator::generate_report;
use crate::report::ingest::decode_contract;
use crate::state::AppState;

/// Runs one audit and returns the Markdown to hand back to the client.
///
/// Steps:
/// 1. credit check (403 when ineligible, no model call is made)
/// 2. decode the upload as UTF-8
/// 3. generate the audit report
/// 4. formatting pass, unless disabled in config
pub async fn run_audit(state: &AppState, request: AuditRequest) -> Result<String, AppError> {
    let audit_id = Uuid::new_v4();
    let span = info_span!("audit", %audit_id, email = %request.email);

    async move {
        // Step 1: Credit check
        if !state.credits.check_credits(&request.email).await? {
            info!("Rejecting audit: user is not eligible");
            return Err(AppError::Forbidden);
        }

        // Step 2: Ingest
        let contract_text =
            decode_contract(&request.contract_source, state.config.max_contract_bytes)?;

        // Step 3: Generate
        let report = generate_report(state.llm.as_ref(), &contract_text).await?;

        // Step 4: Format
        if !state.config.report_formatting {
            return Ok(report.raw_text);
        }
        let formatted = format_report(state.llm.as_ref(), &report).await?;

        info!("Audit complete");
        Ok(formatted.formatted_text)
    }
    .instrument(span)
    .await
}
