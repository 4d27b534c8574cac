use anyhow::{bail, Context, Result};

pub const DEFAULT_AUTO_APPLY_THRESHOLD: f64 = 0.85;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the profile service; profiles live at `{base}/get-profile/{user_id}`.
    pub profile_api_url: String,
    /// Job-listing endpoint, queried as `{url}?id={job_id}`.
    pub job_api_url: String,
    /// ATS submission endpoint. When unset, applications go to the stub submitter.
    pub ats_api_url: Option<String>,
    pub auto_apply_threshold: f64,
    pub upstream_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let auto_apply_threshold = match lookup("AUTO_APPLY_THRESHOLD") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .context("AUTO_APPLY_THRESHOLD must be a number")?,
            None => DEFAULT_AUTO_APPLY_THRESHOLD,
        };
        if !(0.0..=1.0).contains(&auto_apply_threshold) {
            bail!("AUTO_APPLY_THRESHOLD must be between 0 and 1, got {auto_apply_threshold}");
        }

        let upstream_timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };
        if upstream_timeout_secs == 0 {
            bail!("UPSTREAM_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            profile_api_url: require("PROFILE_API_URL")?,
            job_api_url: require("JOB_API_URL")?,
            ats_api_url: lookup("ATS_API_URL").filter(|v| !v.trim().is_empty()),
            auto_apply_threshold,
            upstream_timeout_secs,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn upstream_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.upstream_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("PROFILE_API_URL", "http://profiles.local/api/v1/user"),
        ("JOB_API_URL", "http://jobs.local/api/v1/job-listing"),
    ];

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&REQUIRED)).unwrap();
        assert_eq!(config.auto_apply_threshold, 0.85);
        assert_eq!(config.upstream_timeout_secs, 10);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.ats_api_url.is_none());
    }

    #[test]
    fn test_missing_profile_url_fails() {
        let err = Config::from_lookup(lookup_from(&[("JOB_API_URL", "http://jobs.local")]))
            .unwrap_err();
        assert!(err.to_string().contains("PROFILE_API_URL"));
    }

    #[test]
    fn test_threshold_override() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("AUTO_APPLY_THRESHOLD", "0.5"));
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.auto_apply_threshold, 0.5);
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("AUTO_APPLY_THRESHOLD", "1.5"));
        assert!(Config::from_lookup(lookup_from(&pairs)).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("UPSTREAM_TIMEOUT_SECS", "0"));
        assert!(Config::from_lookup(lookup_from(&pairs)).is_err());
    }

    #[test]
    fn test_blank_ats_url_treated_as_unset() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("ATS_API_URL", "  "));
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert!(config.ats_api_url.is_none());
    }
}
