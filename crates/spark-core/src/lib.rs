//! Spark Core Library
//!
//! This crate provides the core functionality for Spark, including:
//! - The static agent catalog and store filtering
//! - Query suggestions with debounce
//! - Home-page sessions and the mock execution backend
//! - Mock user profile and task history
//! - Agent submission form and mock dashboard
//! - Result export (Markdown/JSON/plain text)
//! - Persisted configuration (theme flag, mock timings)

pub mod catalog;
pub mod config;
pub mod contribute;
pub mod error;
pub mod export;
pub mod profile;
pub mod session;
pub mod suggest;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{CATALOG, CatalogAgent, Category, CategoryFilter};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::session::{Mode, MockBackend, RunResults, Session};
}
