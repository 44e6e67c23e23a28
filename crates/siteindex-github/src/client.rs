//! Blocking GitHub API client.

use crate::error::{FetchError, Result};
use crate::repo::{parse_repos, RepoSummary};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

/// Public GitHub REST endpoint.
pub const API_BASE: &str = "https://api.github.com";

/// GitHub rejects requests without a User-Agent.
pub const USER_AGENT: &str = concat!("siteindex/", env!("CARGO_PKG_VERSION"));

/// Upper bound on the single request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches repository listings.
pub struct GithubClient {
    client: Client,
    api_base: String,
}

impl GithubClient {
    /// Creates a client against the public API.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            api_base: API_BASE.to_string(),
        })
    }

    /// Points the client at another API root (GitHub Enterprise, a mirror).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// The listing url for `user`, most recently updated first.
    pub fn repos_url(&self, user: &str) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&direction=desc",
            self.api_base, user
        )
    }

    /// Lists `user`'s repositories in a single attempt.
    pub fn fetch_repos(&self, user: &str) -> Result<Vec<RepoSummary>> {
        let url = self.repos_url(user);
        info!("Fetching repositories for user: {}", user);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let repos = parse_repos(&body)?;
        debug!("Received {} repositories", repos.len());

        Ok(repos)
    }
}
