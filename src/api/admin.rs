//! Administrator endpoints: news, forum moderation and vote-site configuration
//!
//! The backend enforces the role; these methods only check that a token is
//! present and that required fields are filled in.

use reqwest::Method;

use super::PortalClient;
use crate::error::{Error, Result};
use crate::models::forum::TopicTitle;
use crate::models::{
    CategoryDraft, CategoryPatch, ForumCategory, ForumTopic, NewsDraft, NewsItem, NewsPatch,
    VoteSite, VoteSiteDraft, VoteSitePatch,
};
use crate::pagination::Page;
use crate::utils::{require, require_at_least};

/// Moderation actions that take no body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicAction {
    Lock,
    Unlock,
    Pin,
    Unpin,
}

impl TopicAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lock => "lock",
            Self::Unlock => "unlock",
            Self::Pin => "pin",
            Self::Unpin => "unpin",
        }
    }

    /// The action that flips the topic's current lock state
    pub fn toggle_lock(topic: &ForumTopic) -> Self {
        if topic.is_locked {
            Self::Unlock
        } else {
            Self::Lock
        }
    }

    /// The action that flips the topic's current pin state
    pub fn toggle_pin(topic: &ForumTopic) -> Self {
        if topic.is_pinned {
            Self::Unpin
        } else {
            Self::Pin
        }
    }
}

impl PortalClient {
    // ---- News ----

    /// All news including unpublished drafts
    pub async fn admin_list_news(&self, page: u32, page_size: u32) -> Result<Page<NewsItem>> {
        self.require_token()?;
        self.get_json_with(
            &["news", "admin"],
            &[("page", page), ("page_size", page_size)],
        )
        .await
    }

    pub async fn create_news(&self, draft: &NewsDraft) -> Result<NewsItem> {
        self.require_token()?;
        require("title", &draft.title)?;
        require("content", &draft.content)?;
        self.send_json(Method::POST, &["news"], draft).await
    }

    pub async fn update_news(&self, news_id: i64, patch: &NewsPatch) -> Result<NewsItem> {
        self.require_token()?;
        if patch.is_empty() {
            return Err(Error::validation("nothing to update"));
        }
        self.send_json(Method::PATCH, &["news", &news_id.to_string()], patch)
            .await
    }

    pub async fn delete_news(&self, news_id: i64) -> Result<()> {
        self.require_token()?;
        self.delete(&["news", &news_id.to_string()]).await
    }

    pub async fn delete_news_comment(&self, news_id: i64, comment_id: i64) -> Result<()> {
        self.require_token()?;
        self.delete(&[
            "news",
            &news_id.to_string(),
            "comments",
            &comment_id.to_string(),
        ])
        .await
    }

    // ---- Forum categories ----

    pub async fn create_category(&self, draft: &CategoryDraft) -> Result<ForumCategory> {
        self.require_token()?;
        require("name", &draft.name)?;
        self.send_json(Method::POST, &["forum", "categories"], draft)
            .await
    }

    pub async fn update_category(
        &self,
        category_id: i64,
        patch: &CategoryPatch,
    ) -> Result<ForumCategory> {
        self.require_token()?;
        self.send_json(
            Method::PATCH,
            &["forum", "categories", &category_id.to_string()],
            patch,
        )
        .await
    }

    pub async fn delete_category(&self, category_id: i64) -> Result<()> {
        self.require_token()?;
        self.delete(&["forum", "categories", &category_id.to_string()])
            .await
    }

    // ---- Forum topics ----

    pub async fn edit_topic_title(&self, topic_id: i64, title: &str) -> Result<ForumTopic> {
        self.require_token()?;
        let title = require("title", title)?;
        self.send_json(
            Method::PATCH,
            &["forum", "topics", &topic_id.to_string()],
            &TopicTitle { title },
        )
        .await
    }

    pub async fn delete_topic(&self, topic_id: i64) -> Result<()> {
        self.require_token()?;
        self.delete(&["forum", "topics", &topic_id.to_string()])
            .await
    }

    pub async fn moderate_topic(&self, topic_id: i64, action: TopicAction) -> Result<()> {
        self.require_token()?;
        tracing::info!(topic_id, action = action.as_str(), "Moderating topic");
        self.send_unit(
            Method::POST,
            &["forum", "topics", &topic_id.to_string(), action.as_str()],
            &serde_json::json!({}),
        )
        .await
    }

    pub async fn move_topic(&self, topic_id: i64, new_category_id: i64) -> Result<()> {
        self.require_token()?;
        self.send_unit(
            Method::POST,
            &[
                "forum",
                "topics",
                &topic_id.to_string(),
                "move",
                &new_category_id.to_string(),
            ],
            &serde_json::json!({}),
        )
        .await
    }

    pub async fn delete_post(&self, post_id: i64) -> Result<()> {
        self.require_token()?;
        self.delete(&["forum", "posts", &post_id.to_string()])
            .await
    }

    // ---- Vote sites ----

    /// Vote sites, optionally including disabled ones
    pub async fn admin_vote_sites(&self, include_disabled: bool) -> Result<Vec<VoteSite>> {
        self.get_json_with(
            &["vote", "sites"],
            &[("include_disabled", include_disabled)],
        )
        .await
    }

    pub async fn create_vote_site(&self, draft: &VoteSiteDraft) -> Result<VoteSite> {
        self.require_token()?;
        require("name", &draft.name)?;
        require("url", &draft.url)?;
        require_at_least("cooldown_minutes", draft.cooldown_minutes, 1)?;
        require_at_least("points_reward", draft.points_reward, 1)?;
        self.send_json(Method::POST, &["vote", "sites"], draft).await
    }

    pub async fn update_vote_site(&self, site_id: i64, patch: &VoteSitePatch) -> Result<VoteSite> {
        self.require_token()?;
        if let Some(cooldown) = patch.cooldown_minutes {
            require_at_least("cooldown_minutes", cooldown, 1)?;
        }
        if let Some(reward) = patch.points_reward {
            require_at_least("points_reward", reward, 1)?;
        }
        self.send_json(
            Method::PATCH,
            &["vote", "sites", &site_id.to_string()],
            patch,
        )
        .await
    }

    pub async fn delete_vote_site(&self, site_id: i64) -> Result<()> {
        self.require_token()?;
        self.delete(&["vote", "sites", &site_id.to_string()]).await
    }
}
