use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumCategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::int_or_zero")]
    pub position: i64,
}

/// Topic row as listed under a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumTopic {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub author_username: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub last_post_at: Option<String>,
    #[serde(default, deserialize_with = "super::int_or_zero")]
    pub posts_count: i64,
    #[serde(default, deserialize_with = "super::flag")]
    pub is_locked: bool,
    #[serde(default, deserialize_with = "super::flag")]
    pub is_pinned: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: i64,
    pub topic_id: i64,
    #[serde(default)]
    pub author_username: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `GET /forum/topics/{id}`: the topic row with its posts inlined
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicDetail {
    #[serde(flatten)]
    pub topic: ForumTopic,
    #[serde(default)]
    pub posts: Vec<ForumPost>,
}

/// Body for `POST /forum/categories`
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

/// Body for `PATCH /forum/categories/{id}`
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TopicDraft<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct TopicTitle<'a> {
    pub title: &'a str,
}
