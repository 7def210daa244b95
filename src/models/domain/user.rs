use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Absent for accounts created through Google sign-in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl User {
    pub fn new_local(name: &str, email: &str, password_hash: &str) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: Some(password_hash.to_string()),
            google_id: None,
            role: UserRole::User,
            created_at: Utc::now(),
        }
    }

    pub fn new_google(name: &str, email: &str, google_id: &str) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: None,
            google_id: Some(google_id.to_string()),
            role: UserRole::User,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
impl User {
    pub fn test_user(id: &str, name: &str, role: UserRole) -> Self {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            password_hash: None,
            google_id: None,
            role,
            created_at: Utc::now(),
        }
    }
}
