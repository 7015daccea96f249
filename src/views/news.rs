use crate::api::PortalClient;
use crate::error::{Error, Result};
use crate::models::{NewsComment, NewsItem};
use crate::pagination::Pager;

/// News listing plus the article currently open
#[derive(Debug, Clone)]
pub struct NewsView {
    pager: Pager,
    items: Vec<NewsItem>,
    current: Option<NewsItem>,
}

impl NewsView {
    pub fn new(page_size: u32) -> Self {
        Self {
            pager: Pager::new(page_size),
            items: Vec::new(),
            current: None,
        }
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn current(&self) -> Option<&NewsItem> {
        self.current.as_ref()
    }

    pub async fn load(&mut self, client: &PortalClient) -> Result<()> {
        self.fetch(client, self.pager.page()).await
    }

    /// See [`crate::views::TopicListView::change_page`]
    pub async fn change_page(&mut self, client: &PortalClient, page: u32) -> Result<bool> {
        let Some(page) = self.pager.target(page) else {
            return Ok(false);
        };
        self.fetch(client, page).await?;
        Ok(true)
    }

    async fn fetch(&mut self, client: &PortalClient, page: u32) -> Result<()> {
        let result = client.list_news(page, self.pager.page_size()).await?;
        self.pager.update(&result.pagination);
        self.items = result.items;
        Ok(())
    }

    pub async fn open(&mut self, client: &PortalClient, id_or_slug: &str) -> Result<&NewsItem> {
        let item = client.get_news(id_or_slug).await?;
        Ok(self.current.insert(item))
    }

    /// Comment on the open article; the comment goes to the top of the list
    pub async fn add_comment(&mut self, client: &PortalClient, content: &str) -> Result<NewsComment> {
        let current = self
            .current
            .as_mut()
            .ok_or_else(|| Error::validation("no article is open"))?;

        let comment = client.add_news_comment(current.id, content).await?;
        current
            .comments
            .get_or_insert_with(Vec::new)
            .insert(0, comment.clone());
        *current.comments_count.get_or_insert(0) += 1;
        Ok(comment)
    }
}
