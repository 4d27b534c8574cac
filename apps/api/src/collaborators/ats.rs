use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use super::SubmissionError;

/// Everything the ATS needs to file an application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationSubmission {
    pub user_id: String,
    pub job_id: String,
    pub resume: String,
    pub cover_letter: String,
}

/// Submits applications to an applicant tracking system and returns its id.
#[async_trait]
pub trait ApplicationSubmitter: Send + Sync {
    async fn submit(&self, submission: &ApplicationSubmission) -> Result<String, SubmissionError>;
}

// ────────────────────────────────────────────────────────────────────────────
// StubApplicationSubmitter: used when no ATS endpoint is configured
// ────────────────────────────────────────────────────────────────────────────

/// Issues ids locally without contacting any ATS.
///
/// Ids look like `app_{user[..4]}_{job[..4]}_{hash}` where the hash covers the first
/// ten characters of the resume. Deterministic for a given submission.
pub struct StubApplicationSubmitter;

#[async_trait]
impl ApplicationSubmitter for StubApplicationSubmitter {
    async fn submit(&self, submission: &ApplicationSubmission) -> Result<String, SubmissionError> {
        let application_id = stub_application_id(submission);
        info!(
            "Stub ATS accepted application {application_id} for user {} / job {}",
            submission.user_id, submission.job_id
        );
        Ok(application_id)
    }
}

fn stub_application_id(submission: &ApplicationSubmission) -> String {
    let mut hasher = DefaultHasher::new();
    prefix(&submission.resume, 10).hash(&mut hasher);

    format!(
        "app_{}_{}_{:016x}",
        prefix(&submission.user_id, 4),
        prefix(&submission.job_id, 4),
        hasher.finish()
    )
}

/// First `n` characters, never splitting a code point.
fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HttpApplicationSubmitter: real ATS integration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SubmissionReceipt {
    application_id: String,
}

/// Posts the submission as JSON to the configured ATS endpoint.
/// Each call carries a fresh `Idempotency-Key`; the call itself is never retried.
#[derive(Clone)]
pub struct HttpApplicationSubmitter {
    client: Client,
    endpoint: Url,
}

impl HttpApplicationSubmitter {
    pub fn new(client: Client, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint.trim())
            .with_context(|| format!("ATS_API_URL is not a valid URL: {endpoint}"))?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ApplicationSubmitter for HttpApplicationSubmitter {
    async fn submit(&self, submission: &ApplicationSubmission) -> Result<String, SubmissionError> {
        let idempotency_key = Uuid::new_v4();
        debug!(
            "Submitting application for user {} / job {} (key {idempotency_key})",
            submission.user_id, submission.job_id
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Idempotency-Key", idempotency_key.to_string())
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let receipt: SubmissionReceipt = serde_json::from_slice(&body)?;

        if receipt.application_id.trim().is_empty() {
            return Err(SubmissionError::EmptyApplicationId);
        }

        info!("ATS accepted application {}", receipt.application_id);
        Ok(receipt.application_id)
    }
}
