//! CMS — client for the external headless content API.
//!
//! DESIGN
//! ======
//! The renderer never talks to the network; this module fetches page records
//! ahead of rendering. Configured from environment variables; routes depend
//! on the [`PageSource`] trait rather than the concrete client so tests can
//! substitute a mock.

pub mod client;
pub mod config;
pub mod types;

pub use client::CmsClient;
pub use config::CmsConfig;
pub use types::{CmsError, PageRecord, PageSource, Version};
