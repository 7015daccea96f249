use serde::{Deserialize, Serialize};

/// Role value at or above which a user is an administrator
pub const ADMIN_ROLE: i64 = 2;

/// Token returned by `/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// The logged-in user as returned by `/auth/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMe {
    pub username: String,
    #[serde(default)]
    pub credits: i64,
    #[serde(default)]
    pub vote_points: i64,
    #[serde(default)]
    pub gravatar: String,
    #[serde(default)]
    pub role: Option<i64>,
}

impl UserMe {
    /// Missing role counts as a regular player (1)
    pub fn role(&self) -> i64 {
        self.role.unwrap_or(1)
    }

    pub fn is_admin(&self) -> bool {
        self.role() >= ADMIN_ROLE
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct Registration<'a> {
    pub username: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PasswordChange<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmailChange<'a> {
    pub new_email: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct UsernameOnly<'a> {
    pub username: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RecoveryConfirm<'a> {
    pub username: &'a str,
    pub token: &'a str,
    pub new_password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct VerificationConfirm<'a> {
    pub username: &'a str,
    pub token: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_role_is_player() {
        let me: UserMe = serde_json::from_str(r#"{"username": "arthas"}"#).unwrap();
        assert_eq!(me.role(), 1);
        assert!(!me.is_admin());
    }

    #[test]
    fn test_admin_role() {
        let me: UserMe =
            serde_json::from_str(r#"{"username": "gm", "credits": 3, "role": 3}"#).unwrap();
        assert!(me.is_admin());
        assert_eq!(me.credits, 3);
    }
}
