use anyhow::{Context, Result};

use fwportal::config::Config;
use fwportal::i18n;
use fwportal::session::{Session, TokenStore};
use fwportal::PortalClient;

pub mod account;
pub mod admin;
pub mod forum;
pub mod game;
pub mod news;
pub mod vote;

pub use account::AccountCommand;
pub use admin::AdminCommand;
pub use forum::ForumCommand;
pub use game::PvpCommand;
pub use news::NewsCommand;
pub use vote::VoteCommand;

/// Everything a command handler needs
pub struct AppContext {
    pub config: Config,
    pub client: PortalClient,
    pub session: Session,
}

impl AppContext {
    /// Build the client and restore a stored session
    pub async fn new(mut config: Config, api_base: Option<&str>) -> Result<Self> {
        if let Some(api_base) = api_base {
            config.api.base_url = api_base.to_string();
            config.validate()?;
        }
        i18n::set_locale(&config.ui.language);

        let client = PortalClient::new(&config.api).context("Failed to create API client")?;

        let mut session = Session::new(TokenStore::new(config.session.token_path.clone()));
        if let Err(e) = session.restore(&client).await {
            tracing::warn!(error = %e, "Failed to restore session");
        }

        Ok(Self {
            config,
            client,
            session,
        })
    }
}

/// Collapse a portal error into the short message shown to the user
pub trait UserFacing<T> {
    fn or_user_message(self, fallback_key: &str) -> Result<T>;
}

impl<T> UserFacing<T> for fwportal::Result<T> {
    fn or_user_message(self, fallback_key: &str) -> Result<T> {
        self.map_err(|e| {
            tracing::debug!(error = ?e, "Request failed");
            anyhow::anyhow!(e.user_message(&i18n::message(fallback_key)))
        })
    }
}

/// Print a page footer like `Page 2/5 (93 total)`
pub fn print_pager(pager: &fwportal::pagination::Pager) {
    println!(
        "Page {}/{} ({} total)",
        pager.page(),
        pager.total_pages(),
        pager.total()
    );
}
