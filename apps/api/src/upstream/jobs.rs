use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::{parse_base_url, JobSource, UpstreamError, JOB_NOT_FOUND};
use crate::swipe::models::JobListing;

const SERVICE: &str = "job service";

/// Reads listings from `GET {endpoint}?id={job_id}`.
///
/// The job service answers with every listing matching the query; the first one wins.
#[derive(Clone)]
pub struct HttpJobClient {
    client: Client,
    endpoint: Url,
}

impl HttpJobClient {
    pub fn new(client: Client, endpoint: &str) -> Result<Self> {
        Ok(Self {
            client,
            endpoint: parse_base_url(endpoint, "JOB_API_URL")?,
        })
    }
}

#[async_trait]
impl JobSource for HttpJobClient {
    async fn fetch_job(&self, job_id: &str) -> Result<JobListing, UpstreamError> {
        debug!("Fetching job {job_id} from {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("id", job_id)])
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                service: SERVICE,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Job lookup for {job_id} returned {status}");
            return Err(UpstreamError::NotFound(JOB_NOT_FOUND));
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| UpstreamError::Transport {
                service: SERVICE,
                source,
            })?;

        let listings: Vec<JobListing> =
            serde_json::from_slice(&body).map_err(|source| UpstreamError::Decode {
                service: SERVICE,
                source,
            })?;

        if listings.len() > 1 {
            debug!("Job query {job_id} matched {} listings, using the first", listings.len());
        }

        listings.into_iter().next().ok_or_else(|| {
            warn!("Job lookup for {job_id} returned an empty result set");
            UpstreamError::EmptyResult(JOB_NOT_FOUND)
        })
    }
}
