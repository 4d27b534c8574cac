//! External collaborators the swipe pipeline writes to.
//!
//! None of these systems live in this service. Each is a trait carried in `AppState`
//! as `Arc<dyn ...>`; the implementations here are either thin HTTP clients or
//! log-only stand-ins until a real store is wired in.

use thiserror::Error;

pub mod ats;
pub mod favorites;
pub mod feedback;

pub use ats::{
    ApplicationSubmission, ApplicationSubmitter, HttpApplicationSubmitter,
    StubApplicationSubmitter,
};
pub use favorites::{FavoritesStore, LoggingFavoritesStore};
pub use feedback::{FeedbackStore, LoggingFeedbackStore, SwipeFeedback};

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ATS rejected the submission (status {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("ATS returned an empty application id")]
    EmptyApplicationId,
}

/// Failure writing to a feedback or favorites store.
#[derive(Debug, Error)]
#[error("{store} unavailable: {message}")]
pub struct CollaboratorError {
    pub store: &'static str,
    pub message: String,
}
