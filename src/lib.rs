//! fwportal - Game-server community portal client
//!
//! A typed client for the portal REST API (news, forum, PvP ladders,
//! online players, profiles, vote-for-rewards and account management),
//! together with the view state the portal front-end keeps between calls.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`api`] - HTTP client and one endpoint group per portal area
//! - [`models`] - Request and response DTOs
//! - [`pagination`] - Page arithmetic and the page cursor used by listings
//! - [`session`] - Persisted bearer token and the logged-in user
//! - [`vote`] - Vote panel: cooldowns and claim tracking
//! - [`views`] - Per-view state with optimistic updates
//! - [`utils`] - Common utilities and helpers
//!
//! # Example
//!
//! ```no_run
//! use fwportal::api::PortalClient;
//! use fwportal::config::Config;
//! use fwportal::vote::VotePanel;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = PortalClient::new(&config.api)?;
//!     let panel = VotePanel::load(&client, config.ui.vote_log_page_size).await?;
//!     for site in panel.ordered_sites() {
//!         println!("{} ready in {}ms", site.name, panel.remaining_ms(site.id, chrono::Utc::now()));
//!     }
//!     Ok(())
//! }
//! ```

// Initialize rust-i18n at crate root level
rust_i18n::i18n!("locales", fallback = "en");

pub mod api;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod pagination;
pub mod session;
pub mod utils;
pub mod views;
pub mod vote;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::api::PortalClient;
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, PortalErrorTrait, Result};
    pub use crate::pagination::{Page, Pager, Pagination};
    pub use crate::session::{Session, TokenStore};
    pub use crate::vote::VotePanel;
}

// Direct re-exports for convenience
pub use api::PortalClient;
pub use error::{Error, Result};
