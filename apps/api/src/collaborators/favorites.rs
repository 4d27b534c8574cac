use async_trait::async_trait;
use tracing::info;

use super::CollaboratorError;

/// Jobs a user liked but that scored below the auto-apply threshold.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    async fn save(
        &self,
        user_id: &str,
        job_id: &str,
        match_score: f64,
    ) -> Result<(), CollaboratorError>;
}

/// Writes saved jobs to the log only.
pub struct LoggingFavoritesStore;

#[async_trait]
impl FavoritesStore for LoggingFavoritesStore {
    async fn save(
        &self,
        user_id: &str,
        job_id: &str,
        match_score: f64,
    ) -> Result<(), CollaboratorError> {
        info!(user_id, job_id, match_score, "job saved for later");
        Ok(())
    }
}
