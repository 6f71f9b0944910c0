//! # Site Configuration
//!
//! Configuration is layered: built-in defaults, then an optional JSON file,
//! then command-line overrides. Every field in the file is optional.
//!
//! ```json
//! {
//!   "host": "0.0.0.0",
//!   "port": 3000,
//!   "initial_color_mode": "dark",
//!   "projects_file": "projects.json",
//!   "resume_url": "/static/resume.pdf"
//! }
//! ```

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::catalog::ProjectCatalog;
use crate::error::{Error, Result};
use crate::theme::ColorMode;

/// Config file looked up in the working directory when none is named
pub const DEFAULT_CONFIG_FILE: &str = "portfolio.json";

pub const DEFAULT_PORT: u16 = 8080;

/// Partial configuration, as read from a file or assembled from CLI flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<IpAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_color_mode: Option<ColorMode>,
    /// JSON file replacing the built-in project catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_year: Option<i32>,
}

impl PersistedConfig {
    /// Load the named file, or `portfolio.json` if it exists.
    ///
    /// A named file must exist. The default file is optional.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::read(path, true).await,
            None => Self::read(Path::new(DEFAULT_CONFIG_FILE), false).await,
        }
    }

    async fn read(path: &Path, required: bool) -> Result<Self> {
        if !required && fs::metadata(path).await.is_err() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).await.map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: PersistedConfig =
            serde_json::from_str(&content).map_err(|source| Error::Json {
                path: path.to_path_buf(),
                source,
            })?;

        // Catalog paths are relative to the config file, not the working directory
        if let (Some(projects), Some(parent)) = (config.projects_file.as_mut(), path.parent()) {
            if projects.is_relative() {
                *projects = parent.join(&*projects);
            }
        }

        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Overlay every field that `other` sets
    pub fn merge(&mut self, other: PersistedConfig) {
        if other.host.is_some() {
            self.host = other.host;
        }
        if other.port.is_some() {
            self.port = other.port;
        }
        if other.initial_color_mode.is_some() {
            self.initial_color_mode = other.initial_color_mode;
        }
        if other.projects_file.is_some() {
            self.projects_file = other.projects_file;
        }
        if other.resume_url.is_some() {
            self.resume_url = other.resume_url;
        }
        if other.copyright_year.is_some() {
            self.copyright_year = other.copyright_year;
        }
    }

    /// Fill in defaults and validate
    pub fn resolve(self) -> Result<SiteConfig> {
        let port = self.port.unwrap_or(DEFAULT_PORT);
        if port == 0 {
            return Err(Error::InvalidConfig("port must be non-zero".to_string()));
        }

        Ok(SiteConfig {
            host: self.host.unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            port,
            initial_color_mode: self.initial_color_mode.unwrap_or_default(),
            projects_file: self.projects_file,
            resume_url: self.resume_url.filter(|url| !url.trim().is_empty()),
            copyright_year: self
                .copyright_year
                .unwrap_or_else(|| chrono::Utc::now().year()),
        })
    }
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteConfig {
    pub host: IpAddr,
    pub port: u16,
    pub initial_color_mode: ColorMode,
    pub projects_file: Option<PathBuf>,
    pub resume_url: Option<String>,
    pub copyright_year: i32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            initial_color_mode: ColorMode::default(),
            projects_file: None,
            resume_url: None,
            copyright_year: chrono::Utc::now().year(),
        }
    }
}

impl SiteConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// The configured catalog file, or the built-in catalog
    pub async fn catalog(&self) -> Result<ProjectCatalog> {
        match &self.projects_file {
            Some(path) => ProjectCatalog::load(path).await,
            None => Ok(ProjectCatalog::builtin()),
        }
    }
}
