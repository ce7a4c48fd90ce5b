use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::CompletionModel;
use crate::models::audit::{AuditReport, FormattedReport};
use crate::report::prompts::build_format_prompt;

/// Re-submits a generated report for presentation formatting.
///
/// Content dropped by the model here is not detected.
pub async fn format_report(
    model: &dyn CompletionModel,
    report: &AuditReport,
) -> Result<FormattedReport, AppError> {
    let prompt = build_format_prompt(&report.raw_text);

    let formatted_text = model
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Audit report formatting failed: {e}")))?;

    if formatted_text.len() < report.raw_text.len() / 2 {
        warn!(
            "Formatted report is much shorter than the original ({} vs {} chars)",
            formatted_text.len(),
            report.raw_text.len()
        );
    }
    info!("Formatted audit report: {} chars", formatted_text.len());

    Ok(FormattedReport { formatted_text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::test_support::ScriptedModel;

    #[tokio::test]
    async fn test_formats_the_given_report() {
        let model = ScriptedModel::new(["# **Audit Report**"]);
        let report = AuditReport {
            raw_text: "[Medium-1] Unchecked return value".to_string(),
        };

        let formatted = format_report(&model, &report).await.unwrap();

        assert_eq!(formatted.formatted_text, "# **Audit Report**");
        assert!(model.prompts()[0].ends_with("[Medium-1] Unchecked return value"));
    }

    #[tokio::test]
    async fn test_model_failure_becomes_llm_error() {
        let model = ScriptedModel::failing();
        let report = AuditReport {
            raw_text: "text".to_string(),
        };

        assert!(matches!(
            format_report(&model, &report).await,
            Err(AppError::Llm(_))
        ));
    }
}
