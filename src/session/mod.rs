//! Login state: the persisted bearer token and the current user

mod store;

pub use store::TokenStore;

use crate::api::PortalClient;
use crate::error::{Error, Result};
use crate::models::UserMe;

/// The logged-in user, if any, and where their token is kept.
///
/// The token lives in three places that must agree: the [`TokenStore`], the
/// client's auth header and, indirectly, `user`. Every method here keeps
/// them in step.
#[derive(Debug)]
pub struct Session {
    store: TokenStore,
    user: Option<UserMe>,
}

impl Session {
    pub fn new(store: TokenStore) -> Self {
        Self { store, user: None }
    }

    /// Pick up a stored token and validate it against `/auth/me`.
    ///
    /// A token the backend rejects is discarded so the next start begins
    /// logged out.
    pub async fn restore(&mut self, client: &PortalClient) -> Result<Option<&UserMe>> {
        let Some(token) = self.store.load().await? else {
            client.set_token(None);
            self.user = None;
            return Ok(None);
        };

        client.set_token(Some(token));
        match client.me().await {
            Ok(user) => {
                tracing::debug!(username = %user.username, "Session restored");
                self.user = Some(user);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored token rejected, logging out");
                self.clear(client).await?;
            }
        }
        Ok(self.user.as_ref())
    }

    pub async fn login(
        &mut self,
        client: &PortalClient,
        username: &str,
        password: &str,
    ) -> Result<&UserMe> {
        let response = client.login(username, password).await?;

        self.store.save(&response.access_token).await?;
        client.set_token(Some(response.access_token));
        tracing::info!(username = %username.trim(), "Logged in");

        self.refresh_me(client).await
    }

    /// Create an account, then log straight into it
    pub async fn register(
        &mut self,
        client: &PortalClient,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> Result<&UserMe> {
        client.register(username, password, email).await?;
        self.login(client, username, password).await
    }

    /// Log out locally; the server-side logout is best effort.
    pub async fn logout(&mut self, client: &PortalClient) -> Result<()> {
        if client.has_token() {
            if let Err(e) = client.logout().await {
                tracing::warn!(error = %e, "Server logout failed");
            }
        }
        self.clear(client).await
    }

    async fn clear(&mut self, client: &PortalClient) -> Result<()> {
        client.set_token(None);
        self.user = None;
        self.store.clear().await
    }

    /// Reload the current user, e.g. after a vote claim changed the balance
    pub async fn refresh_me(&mut self, client: &PortalClient) -> Result<&UserMe> {
        let user = client.me().await?;
        Ok(self.user.insert(user))
    }

    pub fn user(&self) -> Option<&UserMe> {
        self.user.as_ref()
    }

    pub fn is_logged(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(UserMe::is_admin)
    }

    pub fn require_login(&self) -> Result<&UserMe> {
        self.user.as_ref().ok_or(Error::NotLoggedIn)
    }

    /// Gate for admin pages. The backend enforces the role again on every
    /// admin request.
    pub fn require_admin(&self) -> Result<&UserMe> {
        let user = self.require_login()?;
        if user.is_admin() {
            Ok(user)
        } else {
            Err(Error::Forbidden)
        }
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }
}
