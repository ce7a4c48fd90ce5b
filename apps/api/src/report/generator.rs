use tracing::info;

use crate::errors::AppError;
use crate::llm_client::CompletionModel;
use crate::models::audit::AuditReport;
use crate::report::prompts::build_audit_prompt;

/// Sends the audit prompt plus contract text to the model.
///
/// The output is whatever Markdown the model returns; its section structure
/// is requested, not checked.
pub async fn generate_report(
    model: &dyn CompletionModel,
    contract_text: &str,
) -> Result<AuditReport, AppError> {
    let prompt = build_audit_prompt(contract_text);

    let raw_text = model
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Audit report generation failed: {e}")))?;

    info!(
        "Generated audit report: {} chars from {} chars of source",
        raw_text.len(),
        contract_text.len()
    );

    Ok(AuditReport { raw_text })
}
