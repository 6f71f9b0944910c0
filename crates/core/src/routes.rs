//! # Routes
//!
//! The page table. The server registers one handler per [`Page`] and the
//! navigation bar is built from [`Page::NAV`].

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Projects,
    Skills,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Projects, Page::Skills];

    /// Pages listed in the navigation bar. Home is reached through the brand link.
    pub const NAV: [Page; 2] = [Page::Projects, Page::Skills];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Projects => "/projects",
            Page::Skills => "/skills",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Projects => "Projects",
            Page::Skills => "Skills",
        }
    }

    /// Resolve a request path, ignoring a trailing slash
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Page::ALL.into_iter().find(|page| page.path() == normalized)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
