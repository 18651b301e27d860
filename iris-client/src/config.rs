//! Client configuration
//!
//! Defines the credential, endpoints and polling behaviour used by
//! [`ReplicateClient`](crate::ReplicateClient).

use std::str::FromStr;
use std::time::Duration;

use crate::error::{ClientError, Result};

/// Hosted inference API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.replicate.com/v1";

/// Public file-hosting endpoint used for image uploads
pub const DEFAULT_UPLOAD_URL: &str = "https://transfer.sh/image.jpg";

/// Delay between two status queries
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// How a prediction is polled until it reaches a terminal status
///
/// Both limits default to `None`, meaning polling continues for as long as
/// the remote job keeps running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOptions {
    /// Delay before each status query
    pub interval: Duration,

    /// Maximum number of status queries
    pub max_attempts: Option<u32>,

    /// Maximum total time spent waiting
    pub timeout: Option<Duration>,
}

impl PollOptions {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: None,
            timeout: None,
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Bearer token sent with every inference API request
    pub api_token: String,

    /// Inference API base URL (e.g., "https://api.replicate.com/v1")
    pub api_base_url: String,

    /// File-hosting endpoint images are uploaded to
    pub upload_url: String,

    pub poll: PollOptions,
}

impl ClientConfig {
    /// Creates a new configuration with defaults
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            poll: PollOptions::default(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - REPLICATE_API_TOKEN (required)
    /// - IRIS_API_BASE_URL (optional)
    /// - IRIS_UPLOAD_URL (optional)
    /// - IRIS_POLL_INTERVAL (optional, seconds, default: 2)
    /// - IRIS_MAX_ATTEMPTS (optional, default: unbounded)
    /// - IRIS_POLL_TIMEOUT (optional, seconds, default: unbounded)
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    ///
    /// Numeric variables that are set but do not parse are rejected, and the
    /// result is validated before it is returned.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = lookup("REPLICATE_API_TOKEN").ok_or_else(|| {
            ClientError::InvalidConfig("REPLICATE_API_TOKEN environment variable not set".into())
        })?;

        let mut config = Self::new(api_token);

        if let Some(url) = lookup("IRIS_API_BASE_URL") {
            config.api_base_url = url;
        }

        if let Some(url) = lookup("IRIS_UPLOAD_URL") {
            config.upload_url = url;
        }

        if let Some(interval) = parse_var::<u64, _>(&lookup, "IRIS_POLL_INTERVAL")? {
            config.poll.interval = Duration::from_secs(interval);
        }

        config.poll.max_attempts = parse_var(&lookup, "IRIS_MAX_ATTEMPTS")?;
        config.poll.timeout = parse_var(&lookup, "IRIS_POLL_TIMEOUT")?.map(Duration::from_secs);

        config.validate()?;
        Ok(config)
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_upload_url(mut self, url: impl Into<String>) -> Self {
        self.upload_url = url.into();
        self
    }

    pub fn with_poll(mut self, poll: PollOptions) -> Self {
        self.poll = poll;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_token.trim().is_empty() {
            return Err(ClientError::InvalidConfig("api_token cannot be empty".into()));
        }

        for (name, url) in [
            ("api_base_url", &self.api_base_url),
            ("upload_url", &self.upload_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ClientError::InvalidConfig(format!(
                    "{} must start with http:// or https://",
                    name
                )));
            }
        }

        if self.poll.interval.is_zero() {
            return Err(ClientError::InvalidConfig(
                "poll interval must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Parses an optional variable; a set but malformed value is an error
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value.trim().parse::<T>().map_err(|_| {
                ClientError::InvalidConfig(format!("{} is not a valid number: {:?}", key, value))
            })
        })
        .transpose()
}
