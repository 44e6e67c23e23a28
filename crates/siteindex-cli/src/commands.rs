//! CLI command implementations.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use siteindex_core::SiteLayout;
use siteindex_github::{save_repos, GithubClient};
use siteindex_scan::{
    generate_filesystem, generate_gallery, generate_library, ManifestReport, PageRenderer,
};
use std::time::Duration;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Regenerate the file browser manifest and the friend sub-sites.
pub fn filesystem(layout: &SiteLayout) -> Result<()> {
    let renderer = PageRenderer::new()?;
    let report = generate_filesystem(layout, &renderer)?;

    print_manifest(&report.main);

    for friend in &report.friends {
        println!(
            "{} Friend {} ({} items)",
            "✓".green(),
            friend.name.cyan(),
            friend.manifest.total_entries
        );
    }

    println!(
        "{} Generated main index and {} friend sub-systems",
        "✓".green(),
        report.friends.len().to_string().cyan()
    );

    Ok(())
}

/// Regenerate the library catalog.
pub fn library(layout: &SiteLayout) -> Result<()> {
    let report = generate_library(layout)?;
    print_manifest(&report);
    Ok(())
}

/// Regenerate the gallery project list.
pub fn gallery(layout: &SiteLayout) -> Result<()> {
    let report = generate_gallery(layout)?;

    match report.output {
        Some(output) => println!(
            "{} Generated {} with {} projects",
            "✓".green(),
            output.display(),
            report.projects.to_string().cyan()
        ),
        None => eprintln!(
            "{} {} not found, nothing written",
            "⚠ Warning:".yellow(),
            layout.gallery_dir().display()
        ),
    }

    Ok(())
}

/// Fetch repository metadata for `user`.
///
/// A failed request is reported but doesn't fail the run; only a failure
/// to write the result does.
pub fn repos(layout: &SiteLayout, user: &str) -> Result<()> {
    let client = GithubClient::new()?;
    repos_with(layout, user, &client)
}

fn repos_with(layout: &SiteLayout, user: &str, client: &GithubClient) -> Result<()> {
    let output = layout.repos_json();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Fetching repositories for {}...", user));

    let fetched = client.fetch_repos(user);
    spinner.finish_and_clear();

    let repos = match fetched {
        Ok(repos) => repos,
        Err(e) if e.is_remote() => {
            eprintln!("{} Error fetching data: {}", "⚠ Warning:".yellow(), e);
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };

    if save_repos(&repos, &output)? {
        println!(
            "{} Saved {} repositories to {}",
            "✓".green(),
            repos.len().to_string().cyan(),
            output.display()
        );
    } else {
        println!("{}", "No repositories found to save.".yellow());
    }

    Ok(())
}

/// Run every generator in sequence.
pub fn all(layout: &SiteLayout, user: &str) -> Result<()> {
    filesystem(layout)?;
    library(layout)?;
    gallery(layout)?;
    repos(layout, user)?;
    Ok(())
}

fn print_manifest(report: &ManifestReport) {
    if !report.root_found {
        eprintln!(
            "{} Directory not found: {}",
            "⚠ Warning:".yellow(),
            report.root.display()
        );
    }

    println!(
        "{} Indexed {} items ({} total) into {}",
        "✓".green(),
        report.entries.to_string().cyan(),
        report.total_entries,
        report.output.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_generators_succeed_on_empty_site() {
        let dir = tempdir().unwrap();
        let layout = SiteLayout::new(dir.path());

        filesystem(&layout).unwrap();
        library(&layout).unwrap();
        gallery(&layout).unwrap();

        assert_eq!(fs::read_to_string(layout.filelist_json()).unwrap(), "[]");
        assert_eq!(fs::read_to_string(layout.library_json()).unwrap(), "[]");
        assert!(!layout.gallery_json().exists());
    }

    #[test]
    fn test_filesystem_writes_friend_pages() {
        let dir = tempdir().unwrap();
        let layout = SiteLayout::new(dir.path());
        let friend = layout.friends_dir().join("nadav");
        fs::create_dir_all(&friend).unwrap();
        fs::write(friend.join("hello.txt"), "hi").unwrap();

        filesystem(&layout).unwrap();

        assert!(friend.join("filelist.json").exists());
        assert!(friend.join("index.html").exists());
        assert!(!fs::read_to_string(layout.filelist_json())
            .unwrap()
            .contains("nadav"));
    }

    #[test]
    fn test_failed_fetch_is_not_fatal_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let layout = SiteLayout::new(dir.path());
        // Port 9 (discard) on localhost is almost never listening.
        let client = GithubClient::new()
            .unwrap()
            .with_api_base("http://127.0.0.1:9");

        repos_with(&layout, "someone", &client).unwrap();

        assert!(!layout.repos_json().exists());
    }
}
