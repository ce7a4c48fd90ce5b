// Report generation: ingest the upload, run the audit prompt, run the
// formatting prompt. All model calls go through llm_client.

pub mod formatter;
pub mod generator;
pub mod handlers;
pub mod ingest;
pub mod pipeline;
pub mod prompts;

#[cfg(test)]
pub(crate) mod test_support;
