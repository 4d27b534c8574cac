//! Upstream Fetchers: the read side of the swipe pipeline.
//!
//! Both lookups are single-shot GETs: no retry, no caching. A non-success status is a
//! lookup failure; anything that never produced a status is a transport failure.
//!
//! `AppState` carries `Arc<dyn ProfileSource>` and `Arc<dyn JobSource>` so handlers
//! never see reqwest directly.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;

use crate::swipe::models::{JobListing, UserProfile};

pub mod jobs;
pub mod profile;

pub use jobs::HttpJobClient;
pub use profile::HttpProfileClient;

pub const PROFILE_NOT_FOUND: &str = "User profile not found";
pub const JOB_NOT_FOUND: &str = "Job not found";

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The upstream answered with a non-success status.
    #[error("{0}")]
    NotFound(&'static str),

    /// The upstream answered successfully but with nothing to select.
    #[error("{0} (empty result set)")]
    EmptyResult(&'static str),

    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned an undecodable body: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of user profiles, keyed by user id.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile, UpstreamError>;
}

/// Source of job listings, keyed by job id.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_job(&self, job_id: &str) -> Result<JobListing, UpstreamError>;
}

/// Builds the shared HTTP client used for upstream calls.
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build upstream HTTP client")
}

pub(crate) fn parse_base_url(raw: &str, what: &str) -> Result<Url> {
    Url::parse(raw.trim()).with_context(|| format!("{what} is not a valid URL: {raw}"))
}
