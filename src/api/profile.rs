//! Public user profiles

use super::PortalClient;
use crate::error::Result;
use crate::models::UserProfile;
use crate::utils::require;

impl PortalClient {
    /// Profile and characters of `username` (percent-encoded into the path)
    pub async fn profile(&self, username: &str) -> Result<UserProfile> {
        let username = require("username", username)?;
        self.get_json(&["profile", username]).await
    }
}
