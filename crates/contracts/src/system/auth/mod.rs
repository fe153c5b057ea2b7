use serde::{Deserialize, Serialize};

/// Roles allowed to manage users and settings
pub const ADMIN_ROLES: [&str; 3] = ["super_admin", "owner", "admin"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
    pub user: UserInfo,
}

/// Signed-in user as reported by `/api/auth/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    #[serde(default, alias = "fullName")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .map_or(false, |role| ADMIN_ROLES.contains(&role))
    }

    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// `/api/auth/me` wraps the user as `{ "user": {...} }`; older builds return it bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CurrentUserEnvelope {
    Wrapped { user: UserInfo },
    Bare(UserInfo),
}

impl CurrentUserEnvelope {
    pub fn into_user(self) -> UserInfo {
        match self {
            CurrentUserEnvelope::Wrapped { user } => user,
            CurrentUserEnvelope::Bare(user) => user,
        }
    }
}
