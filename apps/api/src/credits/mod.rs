//! Credit Verifier: asks the external billing service whether a user may
//! spend a report.
//!
//! The check is advisory: nothing ties it to the later generation call, so the
//! billing side can change between check and use.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::email::EmailAddress;

pub mod handlers;

#[derive(Debug, Serialize)]
struct CreditRequest<'a> {
    email: &'a str,
}

/// Eligibility as reported by the billing service. Never cached.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CreditDecision {
    #[serde(default, deserialize_with = "null_as_false")]
    pub eligible: bool,
    #[serde(default)]
    pub credits: f64,
}

/// The billing service may send `"eligible": null`; that is a "no", not a
/// malformed body.
fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl CreditDecision {
    /// Both the flag and a strictly positive balance are required.
    pub fn may_proceed(&self) -> bool {
        self.eligible && self.credits > 0.0
    }
}

#[derive(Clone)]
pub struct CreditClient {
    client: Client,
    url: String,
}

impl CreditClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetches the current decision for `email`. Single attempt, no retry.
    pub async fn check(&self, email: &EmailAddress) -> Result<CreditDecision, AppError> {
        let response = self
            .client
            .post(&self.url)
            .json(&CreditRequest {
                email: email.as_str(),
            })
            .send()
            .await
            .map_err(|e| {
                warn!("Credit service request failed: {e}");
                AppError::CreditService(format!("request failed: {e}"))
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("Credit service returned {status}: {body}");
            return Err(AppError::CreditService(format!(
                "unexpected status {status}"
            )));
        }

        let decision: CreditDecision = response.json().await.map_err(|e| {
            warn!("Credit service returned an unreadable body: {e}");
            AppError::CreditService(format!("malformed response: {e}"))
        })?;

        info!(
            "Credit decision for {email}: eligible={} credits={}",
            decision.eligible, decision.credits
        );
        Ok(decision)
    }

    pub async fn check_credits(&self, email: &EmailAddress) -> Result<bool, AppError> {
        Ok(self.check(email).await?.may_proceed())
    }
}
