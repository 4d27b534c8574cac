use anyhow::{bail, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::{parse_base_url, ProfileSource, UpstreamError, PROFILE_NOT_FOUND};
use crate::swipe::models::UserProfile;

const SERVICE: &str = "profile service";

/// Reads profiles from `GET {base}/get-profile/{user_id}`.
#[derive(Clone)]
pub struct HttpProfileClient {
    client: Client,
    base_url: Url,
}

impl HttpProfileClient {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        let base_url = parse_base_url(base_url, "PROFILE_API_URL")?;
        if base_url.cannot_be_a_base() {
            bail!("PROFILE_API_URL must be a hierarchical URL: {base_url}");
        }
        Ok(Self { client, base_url })
    }

    /// The user id is pushed as a single escaped path segment.
    fn profile_url(&self, user_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("get-profile").push(user_id);
        }
        url
    }
}

#[async_trait]
impl ProfileSource for HttpProfileClient {
    async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile, UpstreamError> {
        let url = self.profile_url(user_id);
        debug!("Fetching profile: {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                service: SERVICE,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Profile lookup for user {user_id} returned {status}");
            return Err(UpstreamError::NotFound(PROFILE_NOT_FOUND));
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| UpstreamError::Transport {
                service: SERVICE,
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| UpstreamError::Decode {
            service: SERVICE,
            source,
        })
    }
}
