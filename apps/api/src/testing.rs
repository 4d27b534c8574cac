//! In-memory stand-ins for upstream services and collaborators, used by tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::collaborators::{
    ApplicationSubmission, ApplicationSubmitter, CollaboratorError, FavoritesStore,
    FeedbackStore, SubmissionError, SwipeFeedback,
};
use crate::state::AppState;
use crate::swipe::engine::SwipeEngine;
use crate::swipe::models::{JobListing, UserProfile};
use crate::upstream::{
    JobSource, ProfileSource, UpstreamError, JOB_NOT_FOUND, PROFILE_NOT_FOUND,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Default)]
pub struct FakeProfiles {
    profiles: HashMap<String, UserProfile>,
    calls: AtomicUsize,
}

impl FakeProfiles {
    pub fn with(mut self, user_id: &str, skills: &[&str]) -> Self {
        self.profiles.insert(
            user_id.to_string(),
            UserProfile {
                skills: strings(skills),
                resume: format!("resume of {user_id}"),
                name: Some(format!("User {user_id}")),
            },
        );
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileSource for FakeProfiles {
    async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.profiles
            .get(user_id)
            .cloned()
            .ok_or(UpstreamError::NotFound(PROFILE_NOT_FOUND))
    }
}

#[derive(Default)]
pub struct FakeJobs {
    jobs: HashMap<String, JobListing>,
    empty: HashSet<String>,
    garbled: HashSet<String>,
    calls: AtomicUsize,
}

impl FakeJobs {
    pub fn with(mut self, job_id: &str, requirements: &[&str]) -> Self {
        self.jobs.insert(
            job_id.to_string(),
            JobListing {
                requirements: strings(requirements),
                title: Some("Data Engineer".to_string()),
                company: Some("Acme".to_string()),
            },
        );
        self
    }

    /// The job service answers this id with `[]`.
    pub fn with_empty(mut self, job_id: &str) -> Self {
        self.empty.insert(job_id.to_string());
        self
    }

    /// The job service answers this id with a body that does not decode.
    pub fn with_garbled(mut self, job_id: &str) -> Self {
        self.garbled.insert(job_id.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JobSource for FakeJobs {
    async fn fetch_job(&self, job_id: &str) -> Result<JobListing, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.empty.contains(job_id) {
            return Err(UpstreamError::EmptyResult(JOB_NOT_FOUND));
        }
        if self.garbled.contains(job_id) {
            let source = serde_json::from_str::<Vec<JobListing>>("{").unwrap_err();
            return Err(UpstreamError::Decode {
                service: "job service",
                source,
            });
        }
        self.jobs
            .get(job_id)
            .cloned()
            .ok_or(UpstreamError::NotFound(JOB_NOT_FOUND))
    }
}

#[derive(Default)]
pub struct RecordingSubmitter {
    submissions: Mutex<Vec<ApplicationSubmission>>,
}

impl RecordingSubmitter {
    pub fn submissions(&self) -> Vec<ApplicationSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApplicationSubmitter for RecordingSubmitter {
    async fn submit(&self, submission: &ApplicationSubmission) -> Result<String, SubmissionError> {
        let mut submissions = self.submissions.lock().unwrap();
        submissions.push(submission.clone());
        Ok(format!("app-{}", submissions.len()))
    }
}

pub struct FailingSubmitter;

#[async_trait]
impl ApplicationSubmitter for FailingSubmitter {
    async fn submit(&self, _submission: &ApplicationSubmission) -> Result<String, SubmissionError> {
        Err(SubmissionError::Rejected {
            status: 503,
            message: "ATS down".to_string(),
        })
    }
}

#[derive(Default)]
pub struct RecordingFavorites {
    saved: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl RecordingFavorites {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Vec<(String, String)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl FavoritesStore for RecordingFavorites {
    async fn save(
        &self,
        user_id: &str,
        job_id: &str,
        _match_score: f64,
    ) -> Result<(), CollaboratorError> {
        if self.fail {
            return Err(CollaboratorError {
                store: "favorites",
                message: "connection reset".to_string(),
            });
        }
        self.saved
            .lock()
            .unwrap()
            .push((user_id.to_string(), job_id.to_string()));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingFeedback {
    records: Mutex<Vec<SwipeFeedback>>,
}

impl RecordingFeedback {
    pub fn records(&self) -> Vec<SwipeFeedback> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedbackStore for RecordingFeedback {
    async fn record(&self, feedback: SwipeFeedback) -> Result<(), CollaboratorError> {
        self.records.lock().unwrap().push(feedback);
        Ok(())
    }
}

/// Handles on every fake wired into a test `AppState`.
pub struct Harness {
    pub state: AppState,
    pub profiles: Arc<FakeProfiles>,
    pub jobs: Arc<FakeJobs>,
    pub submitter: Arc<RecordingSubmitter>,
    pub favorites: Arc<RecordingFavorites>,
    pub feedback: Arc<RecordingFeedback>,
}

impl Harness {
    pub fn new(profiles: FakeProfiles, jobs: FakeJobs) -> Self {
        let profiles = Arc::new(profiles);
        let jobs = Arc::new(jobs);
        let submitter = Arc::new(RecordingSubmitter::default());
        let favorites = Arc::new(RecordingFavorites::default());
        let feedback = Arc::new(RecordingFeedback::default());

        let state = AppState {
            profiles: profiles.clone(),
            jobs: jobs.clone(),
            feedback: feedback.clone(),
            engine: SwipeEngine::new(submitter.clone(), favorites.clone(), 0.85),
        };

        Self {
            state,
            profiles,
            jobs,
            submitter,
            favorites,
            feedback,
        }
    }

    pub fn upstream_calls(&self) -> usize {
        self.profiles.calls() + self.jobs.calls()
    }
}
