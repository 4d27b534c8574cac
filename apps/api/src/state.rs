use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::collaborators::{
    ApplicationSubmitter, FeedbackStore, HttpApplicationSubmitter, LoggingFavoritesStore,
    LoggingFeedbackStore, StubApplicationSubmitter,
};
use crate::config::Config;
use crate::swipe::engine::SwipeEngine;
use crate::upstream::{
    build_http_client, HttpJobClient, HttpProfileClient, JobSource, ProfileSource,
};

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every swipe is handled independently.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileSource>,
    pub jobs: Arc<dyn JobSource>,
    /// Swipe feedback sink for ranking. Default: LoggingFeedbackStore.
    pub feedback: Arc<dyn FeedbackStore>,
    pub engine: SwipeEngine,
}

impl AppState {
    /// Wires the production collaborators from config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = build_http_client(config.upstream_timeout())?;

        let profiles = HttpProfileClient::new(client.clone(), &config.profile_api_url)?;
        let jobs = HttpJobClient::new(client.clone(), &config.job_api_url)?;

        let submitter: Arc<dyn ApplicationSubmitter> = match &config.ats_api_url {
            Some(url) => {
                info!("Submitting applications to ATS at {url}");
                Arc::new(HttpApplicationSubmitter::new(client, url)?)
            }
            None => {
                info!("ATS_API_URL not set, using stub application submitter");
                Arc::new(StubApplicationSubmitter)
            }
        };

        Ok(AppState {
            profiles: Arc::new(profiles),
            jobs: Arc::new(jobs),
            feedback: Arc::new(LoggingFeedbackStore),
            engine: SwipeEngine::new(
                submitter,
                Arc::new(LoggingFavoritesStore),
                config.auto_apply_threshold,
            ),
        })
    }
}
