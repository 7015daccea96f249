use anyhow::Result;
use clap::{Subcommand, ValueEnum};

use super::forum::print_topics;
use super::{print_pager, AppContext, UserFacing};
use fwportal::api::admin::TopicAction;
use fwportal::models::{
    CategoryDraft, CategoryPatch, NewsDraft, NewsPatch, VoteSiteDraft, VoteSitePatch,
};
use fwportal::pagination::Pager;
use fwportal::views::TopicListView;

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Manage news articles and comments
    #[command(subcommand)]
    News(AdminNewsCommand),

    /// Moderate the forum
    #[command(subcommand)]
    Forum(AdminForumCommand),

    /// Configure vote sites
    #[command(subcommand)]
    Vote(AdminVoteCommand),
}

#[derive(Subcommand)]
pub enum AdminNewsCommand {
    /// All articles, drafts included
    List {
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    Create {
        title: String,
        content: String,

        #[arg(long)]
        summary: Option<String>,

        /// Restrict the article to one realm
        #[arg(long)]
        realm_id: Option<i64>,

        #[arg(long)]
        publish: bool,

        #[arg(long)]
        priority: Option<i64>,
    },

    Update {
        news_id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        #[arg(long)]
        summary: Option<String>,

        #[arg(long)]
        realm_id: Option<i64>,

        #[arg(long)]
        publish: Option<bool>,

        #[arg(long)]
        priority: Option<i64>,
    },

    Delete { news_id: i64 },

    DeleteComment { news_id: i64, comment_id: i64 },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Moderation {
    Lock,
    Unlock,
    Pin,
    Unpin,
    ToggleLock,
    TogglePin,
}

#[derive(Subcommand)]
pub enum AdminForumCommand {
    CreateCategory {
        name: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        position: Option<i64>,
    },

    UpdateCategory {
        category_id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        position: Option<i64>,
    },

    DeleteCategory { category_id: i64 },

    /// Lock, unlock, pin or unpin a topic
    Moderate {
        topic_id: i64,

        #[arg(value_enum)]
        action: Moderation,
    },

    /// Rename a topic
    Title { topic_id: i64, title: String },

    /// Move a topic to another category
    Move { topic_id: i64, category_id: i64 },

    DeleteTopic { topic_id: i64 },

    DeletePost { post_id: i64 },
}

#[derive(Subcommand)]
pub enum AdminVoteCommand {
    /// All vote sites, disabled ones included
    List,

    Create {
        name: String,
        url: String,

        #[arg(long)]
        image_url: Option<String>,

        #[arg(long, default_value = "720")]
        cooldown_minutes: i64,

        #[arg(long, default_value = "1")]
        points_reward: i64,

        #[arg(long)]
        position: Option<i64>,
    },

    Update {
        site_id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        image_url: Option<String>,

        #[arg(long)]
        cooldown_minutes: Option<i64>,

        #[arg(long)]
        points_reward: Option<i64>,

        #[arg(long)]
        position: Option<i64>,

        #[arg(long)]
        enabled: Option<bool>,
    },

    Delete { site_id: i64 },
}

pub async fn run(ctx: &mut AppContext, cmd: AdminCommand) -> Result<()> {
    ctx.session
        .require_admin()
        .or_user_message("views.admin.request_failed")?;

    match cmd {
        AdminCommand::News(cmd) => news(ctx, cmd).await,
        AdminCommand::Forum(cmd) => forum(ctx, cmd).await,
        AdminCommand::Vote(cmd) => vote(ctx, cmd).await,
    }
}

async fn news(ctx: &AppContext, cmd: AdminNewsCommand) -> Result<()> {
    const FALLBACK: &str = "views.admin.request_failed";
    let client = &ctx.client;

    match cmd {
        AdminNewsCommand::List { page } => {
            let mut pager = Pager::new(ctx.config.ui.admin_page_size);
            let result = client
                .admin_list_news(page.max(1), pager.page_size())
                .await
                .or_user_message(FALLBACK)?;
            pager.update(&result.pagination);

            for item in &result.items {
                let state = if item.is_published { "published" } else { "draft" };
                println!("#{} {} [{state}]", item.id, item.title);
            }
            print_pager(&pager);
        }
        AdminNewsCommand::Create {
            title,
            content,
            summary,
            realm_id,
            publish,
            priority,
        } => {
            let draft = NewsDraft {
                title,
                content,
                summary,
                realm_id,
                publish,
                priority,
            };
            let item = client.create_news(&draft).await.or_user_message(FALLBACK)?;
            println!("News #{} created ({})", item.id, item.slug);
        }
        AdminNewsCommand::Update {
            news_id,
            title,
            content,
            summary,
            realm_id,
            publish,
            priority,
        } => {
            let patch = NewsPatch {
                title,
                content,
                summary,
                realm_id,
                publish,
                priority,
            };
            client
                .update_news(news_id, &patch)
                .await
                .or_user_message(FALLBACK)?;
            println!("News #{news_id} updated");
        }
        AdminNewsCommand::Delete { news_id } => {
            client.delete_news(news_id).await.or_user_message(FALLBACK)?;
            println!("News #{news_id} deleted");
        }
        AdminNewsCommand::DeleteComment {
            news_id,
            comment_id,
        } => {
            client
                .delete_news_comment(news_id, comment_id)
                .await
                .or_user_message(FALLBACK)?;
            println!("Comment #{comment_id} deleted");
        }
    }
    Ok(())
}

async fn forum(ctx: &AppContext, cmd: AdminForumCommand) -> Result<()> {
    const FALLBACK: &str = "views.admin.request_failed";
    let client = &ctx.client;
    let page_size = ctx.config.ui.topics_page_size;

    match cmd {
        AdminForumCommand::CreateCategory {
            name,
            description,
            position,
        } => {
            let draft = CategoryDraft {
                name,
                description,
                position,
            };
            let category = client
                .create_category(&draft)
                .await
                .or_user_message(FALLBACK)?;
            println!("Category #{} created", category.id);
        }
        AdminForumCommand::UpdateCategory {
            category_id,
            name,
            description,
            position,
        } => {
            let patch = CategoryPatch {
                name,
                description,
                position,
            };
            client
                .update_category(category_id, &patch)
                .await
                .or_user_message(FALLBACK)?;
            println!("Category #{category_id} updated");
        }
        AdminForumCommand::DeleteCategory { category_id } => {
            client
                .delete_category(category_id)
                .await
                .or_user_message(FALLBACK)?;
            println!("Category #{category_id} deleted");
        }
        AdminForumCommand::Moderate { topic_id, action } => {
            let detail = client
                .get_topic(topic_id)
                .await
                .or_user_message("views.topic.load_failed")?;
            let action = match action {
                Moderation::Lock => TopicAction::Lock,
                Moderation::Unlock => TopicAction::Unlock,
                Moderation::Pin => TopicAction::Pin,
                Moderation::Unpin => TopicAction::Unpin,
                Moderation::ToggleLock => TopicAction::toggle_lock(&detail.topic),
                Moderation::TogglePin => TopicAction::toggle_pin(&detail.topic),
            };

            match detail.topic.category_id {
                Some(category_id) => {
                    let mut view = TopicListView::new(category_id, page_size);
                    view.moderate(client, topic_id, action)
                        .await
                        .or_user_message(FALLBACK)?;
                    print_topics(view.topics());
                }
                None => client
                    .moderate_topic(topic_id, action)
                    .await
                    .or_user_message(FALLBACK)?,
            }
            println!("Topic #{topic_id}: {}", action.as_str());
        }
        AdminForumCommand::Title { topic_id, title } => {
            let topic = client
                .edit_topic_title(topic_id, &title)
                .await
                .or_user_message(FALLBACK)?;
            println!("Topic #{} renamed to {}", topic.id, topic.title);
        }
        AdminForumCommand::Move {
            topic_id,
            category_id,
        } => {
            let detail = client
                .get_topic(topic_id)
                .await
                .or_user_message("views.topic.load_failed")?;
            match detail.topic.category_id {
                Some(current) => {
                    let mut view = TopicListView::new(current, page_size);
                    view.move_topic(client, topic_id, category_id)
                        .await
                        .or_user_message("views.forum.move_failed")?;
                }
                None => client
                    .move_topic(topic_id, category_id)
                    .await
                    .or_user_message("views.forum.move_failed")?,
            }
            println!("Topic #{topic_id} moved to category #{category_id}");
        }
        AdminForumCommand::DeleteTopic { topic_id } => {
            client
                .delete_topic(topic_id)
                .await
                .or_user_message(FALLBACK)?;
            println!("Topic #{topic_id} deleted");
        }
        AdminForumCommand::DeletePost { post_id } => {
            client.delete_post(post_id).await.or_user_message(FALLBACK)?;
            println!("Post #{post_id} deleted");
        }
    }
    Ok(())
}

async fn vote(ctx: &AppContext, cmd: AdminVoteCommand) -> Result<()> {
    const FALLBACK: &str = "views.admin.request_failed";
    let client = &ctx.client;

    match cmd {
        AdminVoteCommand::List => {
            let mut sites = client
                .admin_vote_sites(true)
                .await
                .or_user_message(FALLBACK)?;
            sites.sort_by_key(|s| (s.position, s.id));
            for site in sites {
                println!(
                    "#{:<3} {:<20} every {}m +{} {}{}",
                    site.id,
                    site.name,
                    site.cooldown_minutes,
                    site.points_reward,
                    site.url,
                    if site.is_enabled { "" } else { " (disabled)" }
                );
            }
        }
        AdminVoteCommand::Create {
            name,
            url,
            image_url,
            cooldown_minutes,
            points_reward,
            position,
        } => {
            let draft = VoteSiteDraft {
                name,
                url,
                image_url,
                cooldown_minutes,
                points_reward,
                position,
            };
            let site = client
                .create_vote_site(&draft)
                .await
                .or_user_message(FALLBACK)?;
            println!("Vote site #{} created", site.id);
        }
        AdminVoteCommand::Update {
            site_id,
            name,
            url,
            image_url,
            cooldown_minutes,
            points_reward,
            position,
            enabled,
        } => {
            let patch = VoteSitePatch {
                name,
                url,
                image_url,
                cooldown_minutes,
                points_reward,
                position,
                is_enabled: enabled,
            };
            client
                .update_vote_site(site_id, &patch)
                .await
                .or_user_message(FALLBACK)?;
            println!("Vote site #{site_id} updated");
        }
        AdminVoteCommand::Delete { site_id } => {
            client
                .delete_vote_site(site_id)
                .await
                .or_user_message(FALLBACK)?;
            println!("Vote site #{site_id} deleted");
        }
    }
    Ok(())
}
