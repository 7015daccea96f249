//! Portal REST API
//!
//! [`PortalClient`] owns the HTTP plumbing; each submodule adds the endpoints
//! of one portal area as inherent methods on it.

pub mod admin;
pub mod auth;
pub mod client;
pub mod forum;
pub mod news;
pub mod online;
pub mod profile;
pub mod pvp;
pub mod vote;

pub use client::PortalClient;

use crate::error::{Error, Result};

impl PortalClient {
    /// Fail fast with [`Error::NotLoggedIn`] when no token is set
    pub(crate) fn require_token(&self) -> Result<()> {
        if self.has_token() {
            Ok(())
        } else {
            Err(Error::NotLoggedIn)
        }
    }
}
