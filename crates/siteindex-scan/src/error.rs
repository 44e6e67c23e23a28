//! Errors raised while generating page artifacts.

use siteindex_core::SiteError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Error, Debug)]
pub enum ScanError {
    /// Writing a manifest or page failed.
    #[error(transparent)]
    Site(#[from] SiteError),

    /// The friend page template failed to load or render.
    #[error("failed to render page: {0}")]
    Template(#[from] minijinja::Error),
}
