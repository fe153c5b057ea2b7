use serde::{Deserialize, Serialize};

use crate::domain::common::Identified;
use crate::shared::form::{
    bool_to_flag, deserialize_flag, flag_to_bool, non_empty, required_text, text_or_empty,
    FieldError, FormBinding,
};

/// Roles offered in the user form, in display order
pub const USER_ROLES: [(&str, &str); 5] = [
    ("super_admin", "Super admin"),
    ("owner", "Owner"),
    ("admin", "Administrator"),
    ("manager", "Manager"),
    ("employee", "Employee"),
];

pub const DEFAULT_ROLE: &str = "employee";

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn role_label(role: &str) -> &str {
    USER_ROLES
        .iter()
        .find(|(value, _)| *value == role)
        .map(|(_, label)| *label)
        .unwrap_or(role)
}

/// User account. The users endpoint speaks snake_case and sends booleans for flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_active: Option<i64>,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Identified for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.full_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.username.clone())
    }
}

impl User {
    pub fn is_active(&self) -> bool {
        flag_to_bool(self.is_active)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub id: Option<String>,
    pub username: String,
    /// Write-only. Required on create, optional on update.
    pub password: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub is_active: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            id: None,
            username: String::new(),
            password: String::new(),
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: DEFAULT_ROLE.to_string(),
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPayload {
    pub username: String,
    /// Omitted (not `null`) when unchanged so the stored password survives updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: String,
    pub is_active: i32,
}

impl FormBinding for UserForm {
    type Entity = User;
    type Payload = UserPayload;

    fn from_entity(entity: &User) -> Self {
        Self {
            id: Some(entity.id.clone()),
            username: entity.username.clone(),
            password: String::new(),
            full_name: text_or_empty(entity.full_name.as_deref()),
            email: text_or_empty(entity.email.as_deref()),
            phone: text_or_empty(entity.phone.as_deref()),
            role: entity
                .role
                .clone()
                .filter(|role| !role.is_empty())
                .unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            is_active: flag_to_bool(entity.is_active),
        }
    }

    fn to_payload(&self) -> Result<UserPayload, FieldError> {
        let password = match (self.id.is_some(), self.password.trim().is_empty()) {
            (false, true) => return Err(FieldError::required("password", "Password")),
            (true, true) => None,
            (_, false) if self.password.chars().count() < MIN_PASSWORD_LEN => {
                return Err(FieldError::invalid(
                    "password",
                    "Password",
                    format!("at least {} characters", MIN_PASSWORD_LEN),
                ))
            }
            (_, false) => Some(self.password.clone()),
        };

        Ok(UserPayload {
            username: required_text(&self.username, "username", "Username")?,
            password,
            full_name: required_text(&self.full_name, "full_name", "Full name")?,
            email: non_empty(&self.email),
            phone: non_empty(&self.phone),
            role: required_text(&self.role, "role", "Role")?,
            is_active: bool_to_flag(self.is_active),
        })
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(json: serde_json::Value) -> User {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_password_required_on_create_only() {
        let create = UserForm {
            username: "sara".into(),
            full_name: "Sara Ali".into(),
            ..UserForm::default()
        };
        assert_eq!(create.to_payload().unwrap_err().field(), "password");

        let update = UserForm::from_entity(&user(json!({
            "id": "u1", "username": "sara", "full_name": "Sara Ali", "is_active": true
        })));
        let payload = serde_json::to_value(update.to_payload().unwrap()).unwrap();
        assert!(payload.get("password").is_none());
        assert_eq!(payload["is_active"], json!(1));
    }

    #[test]
    fn test_short_password_rejected() {
        let form = UserForm {
            username: "sara".into(),
            full_name: "Sara Ali".into(),
            password: "123".into(),
            ..UserForm::default()
        };
        assert_eq!(form.to_payload().unwrap_err().field(), "password");
    }

    #[test]
    fn test_missing_role_falls_back_to_employee() {
        let form = UserForm::from_entity(&user(json!({ "id": "u2", "username": "ali", "role": null })));
        assert_eq!(form.role, DEFAULT_ROLE);
        assert!(!form.is_active);
        assert_eq!(role_label("manager"), "Manager");
        assert_eq!(role_label("auditor"), "auditor");
    }

    #[test]
    fn test_binding_is_idempotent() {
        let entity = user(json!({
            "id": "u3", "username": "omar", "full_name": "Omar K", "email": "",
            "phone": "0750", "role": "manager", "is_active": 1
        }));
        let first = UserForm::from_entity(&entity).to_payload().unwrap();

        let mut echoed = serde_json::to_value(&first).unwrap();
        echoed["id"] = json!("u3");
        let second = UserForm::from_entity(&user(echoed)).to_payload().unwrap();
        assert_eq!(first, second);
    }
}
