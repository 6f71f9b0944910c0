//! # Portfolio Core
//!
//! Content and logic for the portfolio site. Nothing here knows about HTTP;
//! the server crate renders these types.
//!
//! ## Architecture
//!
//! - `catalog` - The project catalog and its search filter
//! - `skills` - Skill categories and landing page highlights
//! - `profile` - Owner identity, social links, footer
//! - `routes` - Page table and navigation entries
//! - `theme` - Light/dark color mode
//! - `chat` - Placeholder chat responder
//! - `config` - Layered site configuration
//!
//! ## Usage
//!
//! ```rust
//! use portfolio_core::catalog::ProjectCatalog;
//!
//! let catalog = ProjectCatalog::builtin();
//! let hits = catalog.filter("lstm");
//! assert_eq!(hits[0].name, "Stock Price Prediction");
//! ```

pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod icon;
pub mod profile;
pub mod routes;
pub mod skills;
pub mod theme;

pub use catalog::{ProjectCatalog, ProjectRecord};
pub use error::{Error, Result};
