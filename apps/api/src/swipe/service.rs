//! Swipe pipeline: validate → (pass: skip) → fetch profile + job → decide.
//!
//! The two fetches run concurrently and are both awaited before scoring. When both
//! fail, the profile error is the one reported.

use tracing::{info, warn};

use crate::collaborators::SwipeFeedback;
use crate::errors::AppError;
use crate::state::AppState;
use crate::swipe::models::{JobApplication, SwipeAction, SwipeRequest};

pub async fn process_swipe(
    state: &AppState,
    request: SwipeRequest,
) -> Result<JobApplication, AppError> {
    let action: SwipeAction = request.action.parse()?;

    if action == SwipeAction::Pass {
        info!("User {} passed on job {}", request.user_id, request.job_id);
        record_feedback(state, &request, false).await;
        return Ok(JobApplication::skipped());
    }

    if request.user_id.trim().is_empty() {
        return Err(AppError::Validation("user_id cannot be empty".to_string()));
    }
    if request.job_id.trim().is_empty() {
        return Err(AppError::Validation("job_id cannot be empty".to_string()));
    }

    let (profile, job) = tokio::join!(
        state.profiles.fetch_profile(&request.user_id),
        state.jobs.fetch_job(&request.job_id),
    );
    let profile = profile?;
    let job = job?;

    record_feedback(state, &request, true).await;

    let application = state
        .engine
        .decide(&request.user_id, &request.job_id, action, &profile, &job)
        .await?;

    info!(
        "Swipe {action} {} / {} → {:?} (score {:.3})",
        request.user_id, request.job_id, application.status, application.match_score
    );

    Ok(application)
}

/// Feedback is a side channel; a failed write never changes the response.
async fn record_feedback(state: &AppState, request: &SwipeRequest, liked: bool) {
    let feedback = SwipeFeedback::new(&request.user_id, &request.job_id, liked);
    if let Err(e) = state.feedback.record(feedback).await {
        warn!("Failed to record swipe feedback: {e}");
    }
}
