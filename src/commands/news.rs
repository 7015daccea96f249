use anyhow::Result;
use clap::Subcommand;

use super::{print_pager, AppContext, UserFacing};
use fwportal::models::NewsItem;
use fwportal::pagination::Pager;
use fwportal::utils::truncate_text;
use fwportal::views::NewsView;

#[derive(Subcommand)]
pub enum NewsCommand {
    /// List published news
    List {
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// Show an article with its comments
    Show { id_or_slug: String },

    /// Page through the comments of an article
    Comments {
        news_id: i64,

        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// Comment on an article
    Comment { id_or_slug: String, content: String },
}

pub async fn run(ctx: &mut AppContext, cmd: NewsCommand) -> Result<()> {
    let mut view = NewsView::new(ctx.config.ui.news_page_size);

    match cmd {
        NewsCommand::List { page } => {
            view.load(&ctx.client)
                .await
                .or_user_message("views.news.load_failed")?;
            if page != 1
                && !view
                    .change_page(&ctx.client, page)
                    .await
                    .or_user_message("views.news.load_failed")?
            {
                println!("No page {page}; showing page 1");
            }

            for item in view.items() {
                println!("#{} {} [{}]", item.id, item.title, item.slug);
                if let Some(summary) = item.summary.as_deref() {
                    println!("    {}", truncate_text(summary, 120));
                }
            }
            print_pager(view.pager());
        }

        NewsCommand::Show { id_or_slug } => {
            let item = view
                .open(&ctx.client, &id_or_slug)
                .await
                .or_user_message("views.news.load_failed")?;
            print_article(item);
        }

        NewsCommand::Comments { news_id, page } => {
            let mut pager = Pager::new(ctx.config.ui.comments_page_size);
            let result = ctx
                .client
                .list_news_comments(news_id, page.max(1), pager.page_size())
                .await
                .or_user_message("views.news.load_failed")?;
            pager.update(&result.pagination);

            for comment in &result.items {
                println!(
                    "{}: {}",
                    comment.author.as_deref().unwrap_or("anonymous"),
                    comment.content
                );
            }
            print_pager(&pager);
        }

        NewsCommand::Comment {
            id_or_slug,
            content,
        } => {
            view.open(&ctx.client, &id_or_slug)
                .await
                .or_user_message("views.news.load_failed")?;
            let comment = view
                .add_comment(&ctx.client, &content)
                .await
                .or_user_message("views.news.comment_failed")?;
            println!("Comment #{} posted", comment.id);
        }
    }

    Ok(())
}

fn print_article(item: &NewsItem) {
    println!("{}", item.title);
    if let Some(published) = item.published_at.as_deref() {
        println!(
            "{} | {}",
            item.author.as_deref().unwrap_or("staff"),
            published
        );
    }
    println!();
    println!("{}", item.content);

    let comments = item.comments.as_deref().unwrap_or_default();
    let count = item.comments_count.unwrap_or(comments.len() as u64);
    println!();
    println!("Comments ({count})");
    for comment in comments {
        println!(
            "  {}: {}",
            comment.author.as_deref().unwrap_or("anonymous"),
            comment.content
        );
    }
}
