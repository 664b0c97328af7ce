//! User domain model.
//!
//! Users are the console operators themselves, managed through the admin
//! commands. The list is always refetched after a mutation; there are no
//! optimistic updates.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{Result, TiketError};
use crate::listing::Filterable;

/// Minimum password length accepted when creating or editing a user.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Access role of an operator account.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
pub enum Role {
    #[serde(rename = "admin")]
    #[strum(serialize = "admin")]
    Admin,
    #[serde(rename = "user")]
    #[strum(serialize = "user")]
    #[default]
    User,
}

/// An operator account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    pub role: Role,
    /// Creation timestamp (ISO 8601 format)
    #[serde(default, rename = "createdAt")]
    pub created_at: String,
    /// Last update timestamp (ISO 8601 format)
    #[serde(default, rename = "updatedAt")]
    pub updated_at: String,
}

impl Filterable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.username, &self.name]
    }

    fn filter_key(&self) -> Option<String> {
        Some(self.role.to_string())
    }
}

/// Payload for creating a user via the register endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub password: String,
    pub role: Role,
}

impl NewUser {
    /// Validates the payload before any network call: username and password
    /// are required and the password must meet the minimum length.
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(TiketError::validation("Username and password are required"));
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(TiketError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        Ok(())
    }
}

/// Payload for editing a user.
///
/// A password change rides along on the same request and requires the
/// current password; both fields are omitted from the body when no change
/// is requested.
#[derive(Debug, Clone, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub role: Role,
    #[serde(rename = "currentPassword", skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(rename = "newPassword", skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

impl UserUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.new_password.is_some() && self.current_password.is_none() {
            return Err(TiketError::validation(
                "Current password is required to change password",
            ));
        }
        if let Some(password) = &self.new_password {
            if password.len() < MIN_PASSWORD_LEN {
                return Err(TiketError::validation(format!(
                    "Password must be at least {MIN_PASSWORD_LEN} characters"
                )));
            }
        }
        Ok(())
    }
}

/// Payload for self-service profile updates.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub username: String,
}

/// Validates a self-service password change before any network call.
pub fn validate_password_change(new_password: &str, confirmation: &str) -> Result<()> {
    if new_password.len() < MIN_PASSWORD_LEN {
        return Err(TiketError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if new_password != confirmation {
        return Err(TiketError::validation("Passwords do not match"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_new_user_validation() {
        let mut user = NewUser {
            username: "a".to_string(),
            name: "A".to_string(),
            password: "abcdef".to_string(),
            role: Role::User,
        };
        assert!(user.validate().is_ok());

        user.password = "abc".to_string();
        let err = user.validate().unwrap_err();
        assert!(err.is_validation());

        user.password = String::new();
        assert!(user.validate().is_err());
    }

    #[test]
    fn test_user_update_requires_current_password() {
        let update = UserUpdate {
            name: "A".to_string(),
            role: Role::User,
            current_password: None,
            new_password: Some("abcdef".to_string()),
        };
        assert!(update.validate().unwrap_err().is_validation());

        let update = UserUpdate {
            current_password: Some("old-pass".to_string()),
            ..update
        };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_user_update_omits_unset_password_fields() {
        let update = UserUpdate {
            name: "A".to_string(),
            role: Role::Admin,
            current_password: None,
            new_password: None,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("currentPassword").is_none());
        assert!(json.get("newPassword").is_none());
        assert_eq!(json["role"], "admin");
    }

    #[test]
    fn test_password_change_validation() {
        assert!(validate_password_change("abcdef", "abcdef").is_ok());
        assert!(validate_password_change("abc", "abc").unwrap_err().is_validation());
        assert!(
            validate_password_change("abcdef", "abcdeg")
                .unwrap_err()
                .is_validation()
        );
    }
}
