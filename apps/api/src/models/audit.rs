use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::models::email::EmailAddress;

/// One submission to `/generate_markdown`. Lives for a single request.
#[derive(Debug, Clone)]
pub struct AuditRequest {
    pub email: EmailAddress,
    /// Raw upload, decoded only after the credit check passes.
    pub contract_source: Bytes,
}

/// Markdown produced by the audit prompt, unvalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    pub raw_text: String,
}

/// Audit report after the presentation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedReport {
    pub formatted_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionalEmailQuery {
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    #[serde(rename = "hello server")]
    pub hello_server: bool,
}

#[derive(Debug, Serialize)]
pub struct MarkdownReportResponse {
    pub markdown_report: String,
}
