use anyhow::Result;
use clap::Subcommand;

use super::{AppContext, UserFacing};
use fwportal::models::UserMe;

#[derive(Subcommand)]
pub enum AccountCommand {
    /// Change the password of the logged-in user
    Password {
        #[arg(long, env = "FWPORTAL_PASSWORD", hide_env_values = true)]
        current: String,

        #[arg(long)]
        new: String,
    },

    /// Change the email of the logged-in user
    Email { new_email: String },

    /// Ask for a password recovery token by email
    RecoverRequest { username: String },

    /// Set a new password with a recovery token
    RecoverConfirm {
        username: String,
        token: String,

        #[arg(long)]
        new_password: String,
    },

    /// Ask for an email verification token
    VerifyRequest { username: String },

    /// Confirm an email address with its token
    VerifyConfirm { username: String, token: String },
}

fn print_user(user: &UserMe) {
    println!("{}", user.username);
    println!("  Credits:     {}", user.credits);
    println!("  Vote points: {}", user.vote_points);
    if user.is_admin() {
        println!("  Role:        admin");
    }
}

pub async fn login(ctx: &mut AppContext, username: &str, password: &str) -> Result<()> {
    let user = ctx
        .session
        .login(&ctx.client, username, password)
        .await
        .or_user_message("views.auth.login_failed")?;
    println!("Logged in as {}", user.username);
    Ok(())
}

pub async fn logout(ctx: &mut AppContext) -> Result<()> {
    ctx.session
        .logout(&ctx.client)
        .await
        .or_user_message("views.auth.request_failed")?;
    println!("Logged out");
    Ok(())
}

pub async fn register(
    ctx: &mut AppContext,
    username: &str,
    password: &str,
    email: Option<&str>,
) -> Result<()> {
    let user = ctx
        .session
        .register(&ctx.client, username, password, email)
        .await
        .or_user_message("views.auth.register_failed")?;
    println!("Account created, logged in as {}", user.username);
    Ok(())
}

pub fn me(ctx: &AppContext) -> Result<()> {
    let user = ctx
        .session
        .require_login()
        .or_user_message("views.auth.request_failed")?;
    print_user(user);
    Ok(())
}

pub async fn run(ctx: &mut AppContext, cmd: AccountCommand) -> Result<()> {
    let client = &ctx.client;
    let done = match cmd {
        AccountCommand::Password { current, new } => client
            .change_password(&current, &new)
            .await
            .map(|()| "Password changed"),
        AccountCommand::Email { new_email } => client
            .change_email(&new_email)
            .await
            .map(|()| "Email changed; check your inbox to verify it"),
        AccountCommand::RecoverRequest { username } => client
            .request_password_recovery(&username)
            .await
            .map(|()| "If the account exists, a recovery email was sent"),
        AccountCommand::RecoverConfirm {
            username,
            token,
            new_password,
        } => client
            .confirm_password_recovery(&username, &token, &new_password)
            .await
            .map(|()| "Password reset"),
        AccountCommand::VerifyRequest { username } => client
            .request_email_verification(&username)
            .await
            .map(|()| "Verification email sent"),
        AccountCommand::VerifyConfirm { username, token } => client
            .confirm_email_verification(&username, &token)
            .await
            .map(|()| "Email verified"),
    };

    println!("{}", done.or_user_message("views.auth.request_failed")?);
    Ok(())
}
