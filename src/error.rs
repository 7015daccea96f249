//! Unified error handling for the fwportal crate
//!
//! Every request either succeeds or fails with an [`Error`]. The portal
//! backend reports failures as an HTTP status plus a human-readable `detail`
//! string; that string is preserved so views can show it verbatim, falling
//! back to a generic message when the backend gave none.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fwportal::error::{Error, PortalErrorTrait};
//!
//! fn report(err: &Error) {
//!     eprintln!("{}", err.user_message("Error loading topic"));
//! }
//! ```

use std::io;
use thiserror::Error;

/// Common trait for fwportal error types
pub trait PortalErrorTrait: std::error::Error {
    /// Check if repeating the same action later could succeed
    fn is_recoverable(&self) -> bool;

    /// Get localized description for user-facing messages
    fn localized_desc(&self) -> String;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport failures and 5xx responses
    Network,
    /// Missing or rejected credentials
    Auth,
    /// Input rejected locally or by the backend
    Validation,
    /// Configuration errors
    Config,
    /// Local token storage and I/O errors
    Storage,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    /// Get localized description for the category
    pub fn localized_desc(&self) -> String {
        match self {
            Self::Network => crate::i18n::t!("errors.category.network").to_string(),
            Self::Auth => crate::i18n::t!("errors.category.auth").to_string(),
            Self::Validation => crate::i18n::t!("errors.category.validation").to_string(),
            Self::Config => crate::i18n::t!("errors.category.config").to_string(),
            Self::Storage => crate::i18n::t!("errors.category.storage").to_string(),
            Self::Other => crate::i18n::t!("errors.category.other").to_string(),
        }
    }
}

/// Unified error type for the fwportal crate
#[derive(Error, Debug)]
pub enum Error {
    /// Non-success response from the portal backend
    #[error("API error ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Required field missing or out of range; no request was sent
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Action requires a logged-in user
    #[error("Not logged in")]
    NotLoggedIn,

    /// Action requires an administrator
    #[error("Administrator role required")]
    Forbidden,

    /// Vote site still cooling down; no request was sent
    #[error("Vote cooldown active: {remaining_ms}ms remaining")]
    CooldownActive { remaining_ms: u64 },

    /// Vote site exists but is disabled
    #[error("Vote site {0} is disabled")]
    SiteDisabled(i64),

    /// Vote site not present in the loaded panel
    #[error("Vote site {0} not found")]
    SiteNotFound(i64),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortalErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Api { status, .. } => *status >= 500 || *status == 429,
            Self::Network(_) => true,
            Self::CooldownActive { .. } => true,
            Self::Io(_) => true,
            Self::Decode(_)
            | Self::Validation(_)
            | Self::NotLoggedIn
            | Self::Forbidden
            | Self::SiteDisabled(_)
            | Self::SiteNotFound(_)
            | Self::Config(_)
            | Self::Json(_)
            | Self::Other { .. } => false,
        }
    }

    fn localized_desc(&self) -> String {
        match self {
            Self::Api { status, detail } => match detail {
                Some(detail) => detail.clone(),
                None => format!("{} ({status})", crate::i18n::t!("errors.api.error")),
            },
            Self::Network(e) => format!("{}: {e}", crate::i18n::t!("errors.network.error")),
            Self::Decode(msg) => format!("{}: {msg}", crate::i18n::t!("errors.decode.error")),
            Self::Validation(msg) => msg.clone(),
            Self::NotLoggedIn => crate::i18n::t!("errors.auth.not_logged_in").to_string(),
            Self::Forbidden => crate::i18n::t!("errors.auth.forbidden").to_string(),
            Self::CooldownActive { remaining_ms } => crate::i18n::t!(
                "errors.vote.cooldown",
                remaining = crate::vote::format_duration(*remaining_ms)
            )
            .to_string(),
            Self::SiteDisabled(id) => {
                crate::i18n::t!("errors.vote.disabled", id = id).to_string()
            }
            Self::SiteNotFound(id) => {
                crate::i18n::t!("errors.vote.not_found", id = id).to_string()
            }
            Self::Config(msg) => format!("{}: {msg}", crate::i18n::t!("errors.config.error")),
            Self::Io(e) => format!("{}: {e}", crate::i18n::t!("errors.io.error")),
            Self::Json(e) => format!("{}: {e}", crate::i18n::t!("errors.json.error")),
            Self::Other { context, .. } => context.clone(),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Auth,
                400 | 404 | 409 | 422 | 429 => ErrorCategory::Validation,
                _ => ErrorCategory::Network,
            },
            Self::Network(_) | Self::Decode(_) => ErrorCategory::Network,
            Self::NotLoggedIn | Self::Forbidden => ErrorCategory::Auth,
            Self::Validation(_)
            | Self::CooldownActive { .. }
            | Self::SiteDisabled(_)
            | Self::SiteNotFound(_) => ErrorCategory::Validation,
            Self::Config(_) => ErrorCategory::Config,
            Self::Io(_) | Self::Json(_) => ErrorCategory::Storage,
            Self::Other { .. } => ErrorCategory::Other,
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }

    /// Create a generic error with context and source
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Other {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// HTTP status of a backend rejection, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend-provided detail string, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Short string to show the user.
    ///
    /// Backend `detail` and local validation messages pass through; anything
    /// else collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Validation(msg) => msg.clone(),
            Self::NotLoggedIn
            | Self::Forbidden
            | Self::CooldownActive { .. }
            | Self::SiteDisabled(_)
            | Self::SiteNotFound(_) => self.localized_desc(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err)
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Config(format!("invalid URL: {err}"))
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            context: err.to_string(),
            source: None,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
