use anyhow::Result;
use clap::{Parser, Subcommand};
use fwportal::config::Config;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{
    AccountCommand, AdminCommand, AppContext, ForumCommand, NewsCommand, PvpCommand, VoteCommand,
};

#[derive(Parser)]
#[command(
    name = "fwportal",
    version,
    about = "Command-line front-end for the game-server community portal",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json); defaults to the configured format
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// TOML config file; environment variables are used when absent
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    api_base: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the token
    Login {
        username: String,

        /// Password; read from FWPORTAL_PASSWORD when omitted
        #[arg(short, long, env = "FWPORTAL_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Log out and forget the stored token
    Logout,

    /// Create an account and log into it
    Register {
        username: String,

        #[arg(short, long, env = "FWPORTAL_PASSWORD", hide_env_values = true)]
        password: String,

        #[arg(short, long)]
        email: Option<String>,
    },

    /// Show the logged-in user
    Me,

    /// Password, email, recovery and verification
    #[command(subcommand)]
    Account(AccountCommand),

    /// Read news and comment
    #[command(subcommand)]
    News(NewsCommand),

    /// Browse and post in the forum
    #[command(subcommand)]
    Forum(ForumCommand),

    /// Characters online per realm
    Online {
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// Realm status overview
    Realms,

    /// Honor-kill and arena ladders
    #[command(subcommand)]
    Pvp(PvpCommand),

    /// Character armory
    Armory { realm_id: i64, guid: i64 },

    /// Public profile of a user
    Profile { username: String },

    /// Vote sites and reward claims
    #[command(subcommand)]
    Vote(VoteCommand),

    /// Administration (requires admin role)
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    // Initialize tracing/logging
    let log_format = cli.log_format.as_deref().unwrap_or(&config.logging.format);
    setup_tracing(log_format, &config.logging.level, cli.verbose)?;

    let mut ctx = AppContext::new(config, cli.api_base.as_deref()).await?;
    tracing::debug!(api = %ctx.client.base_url(), "fwportal starting");

    match cli.command {
        Commands::Login { username, password } => {
            commands::account::login(&mut ctx, &username, &password).await?
        }
        Commands::Logout => commands::account::logout(&mut ctx).await?,
        Commands::Register {
            username,
            password,
            email,
        } => {
            commands::account::register(&mut ctx, &username, &password, email.as_deref()).await?
        }
        Commands::Me => commands::account::me(&ctx)?,
        Commands::Account(cmd) => commands::account::run(&mut ctx, cmd).await?,
        Commands::News(cmd) => commands::news::run(&mut ctx, cmd).await?,
        Commands::Forum(cmd) => commands::forum::run(&mut ctx, cmd).await?,
        Commands::Online { page } => commands::game::online(&ctx, page).await?,
        Commands::Realms => commands::game::realms(&ctx).await?,
        Commands::Pvp(cmd) => commands::game::pvp(&ctx, cmd).await?,
        Commands::Armory { realm_id, guid } => {
            commands::game::armory(&ctx, realm_id, guid).await?
        }
        Commands::Profile { username } => commands::game::profile(&ctx, &username).await?,
        Commands::Vote(cmd) => commands::vote::run(&mut ctx, cmd).await?,
        Commands::Admin(cmd) => commands::admin::run(&mut ctx, cmd).await?,
    }

    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("fwportal=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_new(format!("fwportal={level},warn"))
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fwportal=info,warn"))
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
