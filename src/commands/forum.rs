use anyhow::Result;
use clap::Subcommand;

use super::{print_pager, AppContext, UserFacing};
use fwportal::models::ForumTopic;
use fwportal::views::{TopicListView, TopicView};

#[derive(Subcommand)]
pub enum ForumCommand {
    /// List forum categories
    Categories,

    /// List the topics of a category
    Topics {
        category_id: i64,

        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// Show a topic with its posts
    Topic { topic_id: i64 },

    /// Start a new topic
    NewTopic {
        category_id: i64,
        title: String,
        content: String,
    },

    /// Reply to a topic
    Reply { topic_id: i64, content: String },
}

pub async fn run(ctx: &mut AppContext, cmd: ForumCommand) -> Result<()> {
    let client = &ctx.client;
    let page_size = ctx.config.ui.topics_page_size;

    match cmd {
        ForumCommand::Categories => {
            let categories = client
                .list_categories()
                .await
                .or_user_message("views.forum.categories_failed")?;
            for category in categories {
                println!("#{} {}", category.id, category.name);
                if let Some(description) = category.description.as_deref() {
                    println!("    {description}");
                }
            }
        }

        ForumCommand::Topics { category_id, page } => {
            let mut view = TopicListView::new(category_id, page_size);
            view.load(client)
                .await
                .or_user_message("views.forum.topics_failed")?;
            if page != 1
                && !view
                    .change_page(client, page)
                    .await
                    .or_user_message("views.forum.topics_failed")?
            {
                println!("No page {page}; showing page 1");
            }
            print_topics(view.topics());
            print_pager(view.pager());
        }

        ForumCommand::Topic { topic_id } => {
            let mut view = TopicView::new(topic_id);
            let detail = view
                .load(client)
                .await
                .or_user_message("views.topic.load_failed")?;

            println!("{}{}", markers(&detail.topic), detail.topic.title);
            for post in &detail.posts {
                println!();
                println!(
                    "{} ({})",
                    post.author_username,
                    post.created_at.as_deref().unwrap_or("-")
                );
                println!("{}", post.content);
            }
        }

        ForumCommand::NewTopic {
            category_id,
            title,
            content,
        } => {
            let mut view = TopicListView::new(category_id, page_size);
            let topic = view
                .create_topic(client, &title, &content)
                .await
                .or_user_message("views.forum.create_failed")?;
            println!("Topic #{} created", topic.id);
            print_topics(view.topics());
        }

        ForumCommand::Reply { topic_id, content } => {
            let mut view = TopicView::new(topic_id);
            let post = view
                .submit_post(client, &content)
                .await
                .or_user_message("views.topic.post_failed")?;
            println!("Post #{} added to topic #{}", post.id, post.topic_id);
        }
    }

    Ok(())
}

fn markers(topic: &ForumTopic) -> String {
    let mut out = String::new();
    if topic.is_pinned {
        out.push_str("[pinned] ");
    }
    if topic.is_locked {
        out.push_str("[locked] ");
    }
    out
}

pub(crate) fn print_topics(topics: &[ForumTopic]) {
    for topic in topics {
        println!(
            "#{} {}{} by {} ({} posts)",
            topic.id,
            markers(topic),
            topic.title,
            topic.author_username,
            topic.posts_count
        );
    }
}
