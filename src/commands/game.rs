use anyhow::{bail, Result};
use clap::Subcommand;

use super::{AppContext, UserFacing};
use fwportal::models::{faction_name, Bracket};
use fwportal::views::ArenaView;

#[derive(Subcommand)]
pub enum PvpCommand {
    /// Top players by honorable kills
    Top {
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Arena ladders per realm
    Arena {
        /// Only this bracket (2v2, 3v3, 5v5)
        #[arg(short, long)]
        bracket: Option<String>,
    },

    /// Members of an arena team on every realm that knows it
    Team { team_id: i64 },
}

pub async fn online(ctx: &AppContext, page: u32) -> Result<()> {
    let realms = ctx
        .client
        .online(page, ctx.config.ui.online_page_size)
        .await
        .or_user_message("views.online.load_failed")?;

    for realm in realms {
        let total = realm.pagination.map(|p| p.total).unwrap_or(0);
        println!("{} [{}] {} online", realm.name, realm.status, total);
        for character in &realm.characters {
            println!(
                "  {:<14} lvl {:>2} {:<8} {}",
                character.name,
                character.level,
                faction_name(character.faction),
                character.guild.as_deref().unwrap_or("")
            );
        }
    }
    Ok(())
}

pub async fn realms(ctx: &AppContext) -> Result<()> {
    let realms = ctx
        .client
        .realm_status()
        .await
        .or_user_message("views.online.load_failed")?;

    for realm in realms {
        let state = if realm.is_online() { "up" } else { "down" };
        println!(
            "{:<16} {:<5} {} online ({} alliance / {} horde)",
            realm.name, state, realm.online, realm.alliance, realm.horde
        );
    }
    Ok(())
}

pub async fn pvp(ctx: &AppContext, cmd: PvpCommand) -> Result<()> {
    match cmd {
        PvpCommand::Top { limit } => {
            let limit = limit.unwrap_or(ctx.config.ui.top_pvp_limit);
            let realms = ctx
                .client
                .top_pvp(limit)
                .await
                .or_user_message("views.pvp.load_failed")?;
            for realm in realms {
                println!("{}", realm.name);
                for (rank, player) in realm.players.iter().enumerate() {
                    println!(
                        "  {:>3}. {:<14} {:>6} kills  {}",
                        rank + 1,
                        player.name,
                        player.totalkill,
                        faction_name(player.faction)
                    );
                }
            }
        }

        PvpCommand::Arena { bracket } => {
            let brackets = match bracket.as_deref() {
                Some(raw) => match Bracket::parse(raw) {
                    Some(b) => vec![b],
                    None => bail!("Unknown bracket '{raw}', expected 2v2, 3v3 or 5v5"),
                },
                None => Bracket::all().to_vec(),
            };

            let view = ArenaView::new();
            view.fetch(&ctx.client)
                .await
                .or_user_message("views.arena.load_failed")?;

            for realm in view.ladders() {
                println!("{}", realm.name);
                for bracket in &brackets {
                    println!("  {bracket}");
                    for team in realm.teams.teams(*bracket) {
                        println!(
                            "    {:>3}. {:<24} {:>5}  {}/{} season",
                            team.rank, team.name, team.rating, team.season_wins, team.season_games
                        );
                    }
                }
            }
        }

        PvpCommand::Team { team_id } => {
            let realms = ctx
                .client
                .arena_team(team_id)
                .await
                .or_user_message("views.arena.load_failed")?;
            for realm in realms.iter().filter(|r| r.team.is_some()) {
                println!("{}", realm.name);
                for member in &realm.members {
                    println!(
                        "  {:<14} rating {:>5}  {}/{} season",
                        member.name, member.personal_rating, member.season_wins, member.season_games
                    );
                }
            }
        }
    }
    Ok(())
}

pub async fn armory(ctx: &AppContext, realm_id: i64, guid: i64) -> Result<()> {
    let armory = ctx
        .client
        .armory(realm_id, guid)
        .await
        .or_user_message("views.profile.load_failed")?;

    if let Some(character) = &armory.character {
        println!("{}", serde_json::to_string_pretty(character)?);
    }
    for team in &armory.arena_teams {
        println!(
            "{}v{} {} rating {}",
            team.team_type, team.team_type, team.name, team.personal_rating
        );
    }
    Ok(())
}

pub async fn profile(ctx: &AppContext, username: &str) -> Result<()> {
    let profile = ctx
        .client
        .profile(username)
        .await
        .or_user_message("views.profile.load_failed")?;

    println!("{}", profile.username);
    for character in &profile.characters {
        println!(
            "  {:<14} lvl {:>2} on {}",
            character.name, character.level, character.realm_name
        );
    }
    Ok(())
}
