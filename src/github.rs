use anyhow::{Context, Result, bail};
use log::{debug, info};
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use thiserror::Error;

use crate::types::Event;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Why fetching the events feed failed. None of these are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GitHub user not found.")]
    NotFound,
    #[error("API rate limit exceeded. Try again later.")]
    RateLimited,
    #[error("Failed to fetch user activity.\nHTTP Status: {status}")]
    Http { status: u16 },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid activity response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => FetchError::NotFound,
            StatusCode::FORBIDDEN => FetchError::RateLimited,
            other => FetchError::Http {
                status: other.as_u16(),
            },
        }
    }
}

pub struct ActivityClient {
    http: Client,
    base: Url,
}

impl ActivityClient {
    /// Builds a client rooted at `api_url` (e.g. `https://api.github.com`).
    ///
    /// # Errors
    /// Returns an error if the URL cannot serve as a base or the HTTP client
    /// fails to initialize.
    pub fn new(api_url: &str) -> Result<Self> {
        let base = Url::parse(api_url).with_context(|| format!("invalid API URL {api_url}"))?;
        if base.cannot_be_a_base() {
            bail!("invalid API URL {api_url}");
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .context("build HTTP client")?;

        Ok(Self { http, base })
    }

    /// `<base>/users/<username>/events`, with the username as one encoded segment.
    pub fn events_url(&self, username: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["users", username, "events"]);
        }
        url
    }

    /// Fetches the first page of a user's public events.
    ///
    /// # Errors
    /// Any non-2xx status, transport failure or undecodable body.
    pub fn fetch_events(&self, username: &str) -> Result<Vec<Event>, FetchError> {
        let url = self.events_url(username);
        debug!("GET {url}");
        let response = self.http.get(url).send()?;
        let status = response.status();
        info!("events request for {username} returned {status}");
        if !status.is_success() {
            return Err(FetchError::from_status(status));
        }

        let body = response.text()?;
        debug!("received {} bytes", body.len());
        let records: Vec<Value> = serde_json::from_str(&body)?;
        Ok(records.iter().map(Event::from_value).collect())
    }
}
