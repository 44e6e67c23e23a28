//! Repository summaries.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use siteindex_core::{write_manifest, FILE_MANIFEST_INDENT};
use std::path::Path;

/// The subset of a GitHub repository shown on the projects page.
///
/// Deserializes straight from the API's repository objects; every other
/// field is dropped. `stargazers_count` and `visibility` fall back to `0`
/// and `"public"` only when the field is absent, an explicit `null` is
/// kept as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: Option<String>,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub language: Option<String>,
    #[serde(default = "default_stars")]
    pub stargazers_count: Option<u64>,
    #[serde(default = "default_visibility")]
    pub visibility: Option<String>,
    pub updated_at: Option<String>,
}

fn default_stars() -> Option<u64> {
    Some(0)
}

fn default_visibility() -> Option<String> {
    Some("public".to_string())
}

/// Parses an API response body into summaries, preserving order.
pub fn parse_repos(body: &str) -> Result<Vec<RepoSummary>> {
    Ok(serde_json::from_str(body)?)
}

/// Writes `repos` to `path` and returns whether anything was written.
///
/// An empty list leaves any previous file untouched.
pub fn save_repos(repos: &[RepoSummary], path: &Path) -> Result<bool> {
    if repos.is_empty() {
        return Ok(false);
    }

    write_manifest(path, repos, FILE_MANIFEST_INDENT)?;
    Ok(true)
}
