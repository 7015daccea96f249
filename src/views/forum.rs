use crate::api::admin::TopicAction;
use crate::api::PortalClient;
use crate::error::{Error, Result};
use crate::models::{ForumPost, ForumTopic, TopicDetail};
use crate::pagination::Pager;

/// Topics of one category, one page at a time
#[derive(Debug, Clone)]
pub struct TopicListView {
    category_id: i64,
    pager: Pager,
    topics: Vec<ForumTopic>,
}

impl TopicListView {
    pub fn new(category_id: i64, page_size: u32) -> Self {
        Self {
            category_id,
            pager: Pager::new(page_size),
            topics: Vec::new(),
        }
    }

    pub fn category_id(&self) -> i64 {
        self.category_id
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn topics(&self) -> &[ForumTopic] {
        &self.topics
    }

    /// (Re)load the current page
    pub async fn load(&mut self, client: &PortalClient) -> Result<()> {
        self.fetch(client, self.pager.page()).await
    }

    /// Move to `page`. Pages outside `1..=total_pages` are ignored and no
    /// request is made; returns whether the page changed.
    pub async fn change_page(&mut self, client: &PortalClient, page: u32) -> Result<bool> {
        let Some(page) = self.pager.target(page) else {
            return Ok(false);
        };
        self.fetch(client, page).await?;
        Ok(true)
    }

    async fn fetch(&mut self, client: &PortalClient, page: u32) -> Result<()> {
        let result = client
            .list_topics(self.category_id, page, self.pager.page_size())
            .await?;
        self.pager.update(&result.pagination);
        self.topics = result.items;
        Ok(())
    }

    /// New topics sort by activity, so the first page is shown afterwards
    pub async fn create_topic(
        &mut self,
        client: &PortalClient,
        title: &str,
        content: &str,
    ) -> Result<ForumTopic> {
        let topic = client
            .create_topic(self.category_id, title, content)
            .await?;
        self.fetch(client, 1).await?;
        Ok(topic)
    }

    pub async fn moderate(
        &mut self,
        client: &PortalClient,
        topic_id: i64,
        action: TopicAction,
    ) -> Result<()> {
        client.moderate_topic(topic_id, action).await?;
        self.load(client).await
    }

    pub async fn delete_topic(&mut self, client: &PortalClient, topic_id: i64) -> Result<()> {
        client.delete_topic(topic_id).await?;
        self.load(client).await
    }

    /// Move a topic elsewhere; moving it into this same category is refused.
    pub async fn move_topic(
        &mut self,
        client: &PortalClient,
        topic_id: i64,
        new_category_id: i64,
    ) -> Result<()> {
        if new_category_id == self.category_id {
            return Err(Error::validation(format!(
                "topic {topic_id} is already in category {new_category_id}"
            )));
        }
        client.move_topic(topic_id, new_category_id).await?;
        self.load(client).await
    }
}

/// One topic with its posts
#[derive(Debug, Clone)]
pub struct TopicView {
    topic_id: i64,
    detail: Option<TopicDetail>,
}

impl TopicView {
    pub fn new(topic_id: i64) -> Self {
        Self {
            topic_id,
            detail: None,
        }
    }

    pub fn detail(&self) -> Option<&TopicDetail> {
        self.detail.as_ref()
    }

    pub async fn load(&mut self, client: &PortalClient) -> Result<&TopicDetail> {
        let detail = client.get_topic(self.topic_id).await?;
        Ok(self.detail.insert(detail))
    }

    /// Create a post and append it locally without re-fetching the topic
    pub async fn submit_post(&mut self, client: &PortalClient, content: &str) -> Result<ForumPost> {
        let post = client.create_post(self.topic_id, content).await?;
        if let Some(detail) = self.detail.as_mut() {
            detail.posts.push(post.clone());
            detail.topic.posts_count += 1;
        }
        Ok(post)
    }
}
