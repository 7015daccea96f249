//! Public news endpoints

use reqwest::Method;

use super::PortalClient;
use crate::error::Result;
use crate::models::ContentBody;
use crate::models::{NewsComment, NewsItem};
use crate::pagination::Page;
use crate::utils::require;

impl PortalClient {
    /// Published news, newest and highest priority first
    pub async fn list_news(&self, page: u32, page_size: u32) -> Result<Page<NewsItem>> {
        self.get_json_with(&["news"], &[("page", page), ("page_size", page_size)])
            .await
    }

    /// Article with its comments, looked up by numeric id or slug
    pub async fn get_news(&self, id_or_slug: &str) -> Result<NewsItem> {
        let key = require("id_or_slug", id_or_slug)?;
        self.get_json(&["news", key]).await
    }

    pub async fn list_news_comments(
        &self,
        news_id: i64,
        page: u32,
        page_size: u32,
    ) -> Result<Page<NewsComment>> {
        self.get_json_with(
            &["news", &news_id.to_string(), "comments"],
            &[("page", page), ("page_size", page_size)],
        )
        .await
    }

    pub async fn add_news_comment(&self, news_id: i64, content: &str) -> Result<NewsComment> {
        self.require_token()?;
        let content = require("content", content)?;

        self.send_json(
            Method::POST,
            &["news", &news_id.to_string(), "comments"],
            &ContentBody { content },
        )
        .await
    }
}
