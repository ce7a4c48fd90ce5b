// Prompt templates for audit report generation and formatting.
// The section layout requested here is what clients render, so wording
// changes must keep the per-finding headings intact.

/// Audit instructions. The contract source is appended after a single space.
pub const AUDIT_PROMPT: &str = r#"
No preamble, no listed steps, no greeting. Output the report directly. You are a smart contract security auditor. Write a Markdown audit report that explains every vulnerability in the contract below in detail and in plain language.
Lines marked with an `audit` comment in the source are known to be vulnerable and must be covered. Write the report the way a professional auditor documents findings, with an in-depth explanation of each one.
The rules below describe what each heading must contain. Never repeat these instructions in the report.
- TITLE: state the root cause and the impact.
- [S-#]: replace S with High, Medium or Low, judged by the Codehawks guidance on evaluating finding severity, and number findings within each severity.
- Proof of Concept: provide a complete, syntactically valid Foundry test function that exploits the finding, with comments explaining each step. Add a sub-section with the exact `forge test --match-test <testName> -vvvv` command to run it and the lines of contract code involved.
- Whenever you reference a variable or function, write it as `ContractName::memberName`.

Format for every finding:
[S-#] TITLE
Description:
Impact:
Proof of Concept:
Recommended Mitigation:
"#;

/// Presentation pass over a generated report. Replace `{report_markdown}`.
pub const FORMAT_PROMPT_TEMPLATE: &str = "Format this as audit report documentation. \
Make every heading larger and bold, and render every code block with a black background. \
Keep all findings and their content unchanged.
{report_markdown}";

pub fn build_audit_prompt(contract_text: &str) -> String {
    format!("{AUDIT_PROMPT} {contract_text}")
}

pub fn build_format_prompt(report_markdown: &str) -> String {
    FORMAT_PROMPT_TEMPLATE.replace("{report_markdown}", report_markdown)
}
