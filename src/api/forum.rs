//! Public forum endpoints: browsing and posting

use reqwest::Method;

use super::PortalClient;
use crate::error::Result;
use crate::models::forum::TopicDraft;
use crate::models::ContentBody;
use crate::models::{ForumCategory, ForumPost, ForumTopic, TopicDetail};
use crate::pagination::Page;
use crate::utils::require;

impl PortalClient {
    pub async fn list_categories(&self) -> Result<Vec<ForumCategory>> {
        self.get_json(&["forum", "categories"]).await
    }

    /// Topics of a category, pinned first then by last activity
    pub async fn list_topics(
        &self,
        category_id: i64,
        page: u32,
        page_size: u32,
    ) -> Result<Page<ForumTopic>> {
        self.get_json_with(
            &["forum", "categories", &category_id.to_string(), "topics"],
            &[("page", page), ("page_size", page_size)],
        )
        .await
    }

    pub async fn get_topic(&self, topic_id: i64) -> Result<TopicDetail> {
        self.get_json(&["forum", "topics", &topic_id.to_string()])
            .await
    }

    pub async fn create_topic(
        &self,
        category_id: i64,
        title: &str,
        content: &str,
    ) -> Result<ForumTopic> {
        self.require_token()?;
        let body = TopicDraft {
            title: require("title", title)?,
            content: require("content", content)?,
        };
        self.send_json(
            Method::POST,
            &["forum", "categories", &category_id.to_string(), "topics"],
            &body,
        )
        .await
    }

    pub async fn create_post(&self, topic_id: i64, content: &str) -> Result<ForumPost> {
        self.require_token()?;
        let content = require("content", content)?;
        self.send_json(
            Method::POST,
            &["forum", "topics", &topic_id.to_string(), "posts"],
            &ContentBody { content },
        )
        .await
    }
}
