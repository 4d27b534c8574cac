use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::AppError;

/// Request body for `POST /api/swipes`.
///
/// `action` stays a plain string here: an unknown action is a 400, while a body that
/// does not decode at all is a 422.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeRequest {
    pub user_id: String,
    pub job_id: String,
    pub action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    Like,
    Pass,
}

impl FromStr for SwipeAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(SwipeAction::Like),
            "pass" => Ok(SwipeAction::Pass),
            _ => Err(AppError::Validation("Invalid action".to_string())),
        }
    }
}

impl fmt::Display for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SwipeAction::Like => "like",
            SwipeAction::Pass => "pass",
        })
    }
}

/// Read-only copy of a profile owned by the profile service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resume: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Read-only copy of a listing owned by the job service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    SavedForLater,
    Skipped,
}

/// Outcome of a swipe. `application_id` is empty unless the status is `applied`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub application_id: String,
    pub status: ApplicationStatus,
    pub match_score: f64,
}

impl JobApplication {
    pub fn skipped() -> Self {
        Self {
            application_id: String::new(),
            status: ApplicationStatus::Skipped,
            match_score: 0.0,
        }
    }

    pub fn saved_for_later(match_score: f64) -> Self {
        Self {
            application_id: String::new(),
            status: ApplicationStatus::SavedForLater,
            match_score,
        }
    }

    pub fn applied(application_id: String, match_score: f64) -> Self {
        Self {
            application_id,
            status: ApplicationStatus::Applied,
            match_score,
        }
    }
}

/// Upstream services send `null` for absent lists as often as they omit the key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
