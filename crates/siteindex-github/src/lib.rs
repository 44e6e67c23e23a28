//! siteindex GitHub - repository metadata for the projects page
//!
//! One unauthenticated request lists a user's public repositories,
//! most recently updated first. Only the fields the page displays are
//! kept. There are no retries: a failed fetch simply leaves the previous
//! `repos.json` in place.

mod client;
mod error;
mod repo;

pub use client::{GithubClient, API_BASE, REQUEST_TIMEOUT, USER_AGENT};
pub use error::{FetchError, Result};
pub use repo::{parse_repos, save_repos, RepoSummary};
