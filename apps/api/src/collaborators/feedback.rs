use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::CollaboratorError;

/// One swipe, kept as a training signal for ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwipeFeedback {
    pub user_id: String,
    pub job_id: String,
    pub liked: bool,
    pub recorded_at: DateTime<Utc>,
}

impl SwipeFeedback {
    pub fn new(user_id: &str, job_id: &str, liked: bool) -> Self {
        Self {
            user_id: user_id.to_string(),
            job_id: job_id.to_string(),
            liked,
            recorded_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn record(&self, feedback: SwipeFeedback) -> Result<(), CollaboratorError>;
}

/// Writes feedback to the log only.
pub struct LoggingFeedbackStore;

#[async_trait]
impl FeedbackStore for LoggingFeedbackStore {
    async fn record(&self, feedback: SwipeFeedback) -> Result<(), CollaboratorError> {
        info!(
            user_id = %feedback.user_id,
            job_id = %feedback.job_id,
            liked = feedback.liked,
            recorded_at = %feedback.recorded_at,
            "swipe feedback"
        );
        Ok(())
    }
}
