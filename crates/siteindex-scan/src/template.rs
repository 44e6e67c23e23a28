//! Page rendering for friend sub-sites.
//!
//! Each friend folder gets a copy of the file browser page that loads
//! the `filelist.json` sitting next to it and points its assets back at
//! the site root.

use crate::error::Result;
use minijinja::{context, Environment};

const FRIEND_PAGE_NAME: &str = "friend_index.html";
const FRIEND_PAGE_SOURCE: &str = include_str!("../templates/friend_index.html");

/// Renders the generated HTML pages.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Loads the built-in templates.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(FRIEND_PAGE_NAME, FRIEND_PAGE_SOURCE)?;
        Ok(Self { env })
    }

    /// Renders the index page of one friend folder.
    ///
    /// `path_to_root` is the relative prefix from that folder back to the
    /// site root, e.g. `../../../..`.
    pub fn render_friend_page(&self, folder_name: &str, path_to_root: &str) -> Result<String> {
        let template = self.env.get_template(FRIEND_PAGE_NAME)?;
        let html = template.render(context! {
            folder_name => folder_name,
            root => path_to_root,
        })?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friend_page_links_back_to_root() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer.render_friend_page("nadav", "../../../..").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Filesystem // nadav</title>"));
        assert!(html.contains(r#"href="../../../../style.css""#));
        assert!(html.contains(r#"src="../../../../filesystem/filesystem.js""#));
        assert!(html.contains("CONNECTED TO NODE: NADAV ..."));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_folder_name_is_escaped() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer.render_friend_page("<b>&co", "..").unwrap();

        assert!(!html.contains("<b>&co"));
        assert!(html.contains("&lt;b&gt;&amp;co"));
    }
}
