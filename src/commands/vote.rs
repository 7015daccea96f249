use anyhow::Result;
use chrono::Utc;
use clap::Subcommand;

use super::{AppContext, UserFacing};
use fwportal::i18n;
use fwportal::vote::{format_duration, VotePanel};

#[derive(Subcommand)]
pub enum VoteCommand {
    /// List vote sites with their cooldowns
    List,

    /// Claim the reward of a site
    Claim { site_id: i64 },

    /// Recent claims of the logged-in user
    Logs,
}

pub async fn run(ctx: &mut AppContext, cmd: VoteCommand) -> Result<()> {
    let mut panel = VotePanel::load(&ctx.client, ctx.config.ui.vote_log_page_size)
        .await
        .or_user_message("views.vote.load_failed")?;

    match cmd {
        VoteCommand::List => print_sites(&panel),

        VoteCommand::Claim { site_id } => {
            let response = panel
                .claim(&ctx.client, site_id, Utc::now())
                .await
                .or_user_message("views.vote.claim_failed")?;

            println!(
                "+{} vote points ({} total)",
                response.reward, response.total_vote_points
            );
            if let Some(url) = response.site_url.as_deref() {
                println!("Finish your vote at {url}");
            }

            if let Err(e) = ctx.session.refresh_me(&ctx.client).await {
                tracing::warn!(error = %e, "Failed to refresh user after claim");
            }
        }

        VoteCommand::Logs => {
            for claim in panel.claims() {
                let name = panel
                    .site(claim.site_id)
                    .map(|s| s.name.as_str())
                    .unwrap_or("?");
                println!(
                    "{:<20} +{:<3} next at {}",
                    name,
                    claim.reward,
                    claim.next_available_at.as_deref().unwrap_or("-")
                );
            }
        }
    }

    Ok(())
}

fn print_sites(panel: &VotePanel) {
    let now = Utc::now();
    for site in panel.ordered_sites() {
        let state = if !site.is_enabled {
            String::from("disabled")
        } else {
            match panel.remaining_ms(site.id, now) {
                0 => i18n::message("views.vote.ready"),
                ms => format_duration(ms),
            }
        };
        println!(
            "#{:<3} {:<20} +{:<3} {}",
            site.id, site.name, site.points_reward, state
        );
    }
}
