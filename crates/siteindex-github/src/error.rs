//! Fetch errors.

use siteindex_core::SiteError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, TLS or timeout failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with something other than 200 OK.
    #[error("received status code {0}")]
    Status(u16),

    /// The body wasn't a JSON array of repositories.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Writing `repos.json` failed.
    #[error(transparent)]
    Site(#[from] SiteError),
}

impl FetchError {
    /// Whether the failure came from the remote side.
    ///
    /// Remote failures leave no artifact but aren't fatal for the build.
    pub fn is_remote(&self) -> bool {
        !matches!(self, Self::Site(_))
    }
}
