//! Account endpoints under `/auth`

use reqwest::Method;

use super::PortalClient;
use crate::error::Result;
use crate::models::account::{
    Credentials, EmailChange, PasswordChange, RecoveryConfirm, Registration, UsernameOnly,
    VerificationConfirm,
};
use crate::models::{LoginResponse, UserMe};
use crate::utils::{optional, require};

impl PortalClient {
    /// Exchange credentials for a bearer token. The token is returned, not
    /// installed; [`crate::session::Session`] decides where it lives.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let username = require("username", username)?;
        require("password", password)?;

        let body = Credentials { username, password };
        self.send_json(Method::POST, &["auth", "login"], &body).await
    }

    pub async fn register(
        &self,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> Result<()> {
        let username = require("username", username)?;
        require("password", password)?;

        let body = Registration {
            username,
            password,
            email: optional(email),
        };
        self.send_unit(Method::POST, &["auth", "register"], &body)
            .await
    }

    /// The user the current token belongs to
    pub async fn me(&self) -> Result<UserMe> {
        self.require_token()?;
        self.get_json(&["auth", "me"]).await
    }

    /// Invalidate the token server-side
    pub async fn logout(&self) -> Result<()> {
        self.require_token()?;
        self.send_unit(Method::POST, &["auth", "logout"], &serde_json::json!({}))
            .await
    }

    pub async fn change_password(&self, current_password: &str, new_password: &str) -> Result<()> {
        self.require_token()?;
        require("current_password", current_password)?;
        require("new_password", new_password)?;

        let body = PasswordChange {
            current_password,
            new_password,
        };
        self.send_unit(Method::POST, &["auth", "change_password"], &body)
            .await
    }

    pub async fn change_email(&self, new_email: &str) -> Result<()> {
        self.require_token()?;
        let new_email = require("new_email", new_email)?;

        self.send_unit(
            Method::POST,
            &["auth", "change_email"],
            &EmailChange { new_email },
        )
        .await
    }

    pub async fn request_password_recovery(&self, username: &str) -> Result<()> {
        let username = require("username", username)?;
        self.send_unit(
            Method::POST,
            &["auth", "password_recovery", "request"],
            &UsernameOnly { username },
        )
        .await
    }

    pub async fn confirm_password_recovery(
        &self,
        username: &str,
        token: &str,
        new_password: &str,
    ) -> Result<()> {
        let body = RecoveryConfirm {
            username: require("username", username)?,
            token: require("token", token)?,
            new_password: require("new_password", new_password).map(|_| new_password)?,
        };
        self.send_unit(
            Method::POST,
            &["auth", "password_recovery", "confirm"],
            &body,
        )
        .await
    }

    pub async fn request_email_verification(&self, username: &str) -> Result<()> {
        let username = require("username", username)?;
        self.send_unit(
            Method::POST,
            &["auth", "email_verification", "request"],
            &UsernameOnly { username },
        )
        .await
    }

    pub async fn confirm_email_verification(&self, username: &str, token: &str) -> Result<()> {
        let body = VerificationConfirm {
            username: require("username", username)?,
            token: require("token", token)?,
        };
        self.send_unit(
            Method::POST,
            &["auth", "email_verification", "confirm"],
            &body,
        )
        .await
    }
}
