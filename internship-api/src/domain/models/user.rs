use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::UserId;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl From<String> for Role {
    fn from(role: String) -> Self {
        match role.as_str() {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role_str = match self {
            Role::Admin => "admin",
            Role::User => "user",
        };
        write!(f, "{role_str}")
    }
}

#[derive(Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub phone: i64,
    pub name: String,
    pub college: Option<String>,
    /// Argon2 PHC string. Never the submitted plaintext.
    pub password_hash: String,
    pub role: Role,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("name", &self.name)
            .field("college", &self.college)
            .field("role", &self.role)
            .field("password_hash", &"[redacted]")
            .finish()
    }
}

/// A user ready for persistence, password already hashed.
#[derive(Clone)]
pub struct NewUser {
    pub email: String,
    pub phone: i64,
    pub name: String,
    pub college: Option<String>,
    pub password_hash: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password_hash", &"[redacted]")
            .finish()
    }
}

/// Registration request as submitted by a client.
///
/// `name` may be omitted when `fname`/`lname` are given; they are joined.
#[derive(Clone, Default, Deserialize)]
pub struct Registration {
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<i64>,
    pub name: Option<String>,
    pub fname: Option<String>,
    pub lname: Option<String>,
    pub college: Option<String>,
}

impl Registration {
    pub fn display_name(&self) -> Option<String> {
        if let Some(name) = self.name.as_deref().map(str::trim) {
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }

        let joined = [self.fname.as_deref(), self.lname.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        (!joined.is_empty()).then_some(joined)
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("name", &self.display_name())
            .field("college", &self.college)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Profile fields a user may change. The password is not among them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub phone: Option<i64>,
    pub college: Option<String>,
}

impl ProfilePatch {
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
        if self.college.is_some() {
            user.college = self.college.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_defaults_to_user() {
        assert_eq!(Role::default(), Role::User);
        assert_eq!(Role::from("superuser".to_string()), Role::User);
        assert_eq!(Role::from("admin".to_string()), Role::Admin);
    }

    #[test]
    fn registration_joins_first_and_last_name() {
        let registration = Registration {
            fname: Some("Ada".to_string()),
            lname: Some("Lovelace".to_string()),
            ..Default::default()
        };
        assert_eq!(registration.display_name().as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn registration_prefers_explicit_name() {
        let registration = Registration {
            name: Some("Grace Hopper".to_string()),
            fname: Some("Ada".to_string()),
            ..Default::default()
        };
        assert_eq!(registration.display_name().as_deref(), Some("Grace Hopper"));
    }

    #[test]
    fn registration_debug_redacts_password() {
        let registration = Registration {
            email: Some("a@b.com".to_string()),
            password: Some("hunter2".to_string()),
            ..Default::default()
        };
        let debug = format!("{registration:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[redacted]"));
    }
}
