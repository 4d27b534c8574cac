//! Swipe Decision Engine: turns a like into an application or a saved job.
//!
//! like: score → threshold → (submit | save). pass: skipped, nothing else.
//! The engine never fetches; callers hand it the profile and listing.

use std::sync::Arc;

use tracing::{info, warn};

use crate::collaborators::{ApplicationSubmission, ApplicationSubmitter, FavoritesStore};
use crate::errors::AppError;
use crate::swipe::cover_letter::generate_cover_letter;
use crate::swipe::models::{JobApplication, JobListing, SwipeAction, UserProfile};
use crate::swipe::scoring::compute_match_score;

#[derive(Clone)]
pub struct SwipeEngine {
    submitter: Arc<dyn ApplicationSubmitter>,
    favorites: Arc<dyn FavoritesStore>,
    /// Scores at or above this are submitted automatically.
    auto_apply_threshold: f64,
}

impl SwipeEngine {
    pub fn new(
        submitter: Arc<dyn ApplicationSubmitter>,
        favorites: Arc<dyn FavoritesStore>,
        auto_apply_threshold: f64,
    ) -> Self {
        Self {
            submitter,
            favorites,
            auto_apply_threshold,
        }
    }

    pub async fn decide(
        &self,
        user_id: &str,
        job_id: &str,
        action: SwipeAction,
        profile: &UserProfile,
        job: &JobListing,
    ) -> Result<JobApplication, AppError> {
        if action == SwipeAction::Pass {
            return Ok(JobApplication::skipped());
        }

        let match_score = compute_match_score(&profile.skills, &job.requirements);

        if match_score >= self.auto_apply_threshold {
            info!(
                "Match {match_score:.3} >= {:.3} for user {user_id} / job {job_id}, auto-applying",
                self.auto_apply_threshold
            );

            let submission = ApplicationSubmission {
                user_id: user_id.to_string(),
                job_id: job_id.to_string(),
                resume: profile.resume.clone(),
                cover_letter: generate_cover_letter(profile, job),
            };
            let application_id = self.submitter.submit(&submission).await?;

            return Ok(JobApplication::applied(application_id, match_score));
        }

        info!(
            "Match {match_score:.3} < {:.3} for user {user_id} / job {job_id}, saving for later",
            self.auto_apply_threshold
        );

        // The disposition stands even if the favorites store is down.
        if let Err(e) = self.favorites.save(user_id, job_id, match_score).await {
            warn!("Failed to save job {job_id} for user {user_id}: {e}");
        }

        Ok(JobApplication::saved_for_later(match_score))
    }
}
