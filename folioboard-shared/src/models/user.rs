/// User model
///
/// This module provides the User model representing portfolio owners and
/// collaborators, plus the input structs used for registration and
/// profile edits.
///
/// Users are created at registration/onboarding and mutated only through
/// profile edits; the dashboard never deletes them.
///
/// # Example
///
/// ```
/// use folioboard_shared::models::user::CreateUser;
/// use validator::Validate;
///
/// let input = CreateUser {
///     name: "John Doe".to_string(),
///     email: "John.Doe@Demo.com".to_string(),
///     title: Some("Full Stack Developer".to_string()),
///     bio: None,
///     skills: vec!["Rust".to_string(), "React".to_string()],
///     social_links: Default::default(),
/// };
/// assert!(input.validate().is_ok());
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

/// User model representing a portfolio owner or collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID (UUID v4)
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address
    ///
    /// Unique across all users. Matching is always done on the
    /// lowercase-normalized form, see [`User::normalized_email`].
    pub email: String,

    /// Professional title shown on the portfolio page
    pub title: Option<String>,

    /// Short biography
    pub bio: Option<String>,

    /// Skills in insertion order
    ///
    /// Duplicates are allowed in the data; display layers dedupe by value
    /// via [`User::unique_skills`].
    #[serde(default)]
    pub skills: Vec<String>,

    /// Social links, platform name to URL
    #[serde(default)]
    pub social_links: HashMap<String, String>,

    /// When the user account was created
    pub created_at: DateTime<Utc>,

    /// When the user account was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Email address normalized for matching (trimmed, lowercased)
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }

    /// Uppercased first character of the name, used for avatar placeholders
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().map(|c| c.to_ascii_uppercase())
    }

    /// Skills deduplicated by value, first occurrence wins
    pub fn unique_skills(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for skill in &self.skills {
            if !seen.contains(&skill.as_str()) {
                seen.push(skill.as_str());
            }
        }
        seen
    }
}

/// Input for creating a new user profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUser {
    /// Display name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    /// Email address (stored as given, matched lowercase)
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Professional title
    pub title: Option<String>,

    /// Short biography
    pub bio: Option<String>,

    /// Skills in insertion order
    #[serde(default)]
    pub skills: Vec<String>,

    /// Social links, platform name to URL
    #[serde(default)]
    pub social_links: HashMap<String, String>,
}

/// Input for updating an existing user profile
///
/// All fields are optional; only non-None fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUser {
    /// New display name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New email address
    #[validate(email(message = "Invalid email format"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New professional title (use Some(None) to clear)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,

    /// New biography (use Some(None) to clear)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,

    /// Replacement skills list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,

    /// Replacement social links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(name: &str, email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            title: None,
            bio: None,
            skills: Vec::new(),
            social_links: HashMap::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_normalized_email() {
        let user = make_user("Demo", "  John.Doe@Demo.COM ");
        assert_eq!(user.normalized_email(), "john.doe@demo.com");
    }

    #[test]
    fn test_initial() {
        let user = make_user("sarah", "s@example.com");
        assert_eq!(user.initial(), Some('S'));

        let empty = make_user("", "e@example.com");
        assert_eq!(empty.initial(), None);
    }

    #[test]
    fn test_unique_skills_preserves_first_occurrence() {
        let mut user = make_user("Demo", "d@example.com");
        user.skills = vec![
            "Rust".to_string(),
            "React".to_string(),
            "Rust".to_string(),
        ];
        assert_eq!(user.unique_skills(), vec!["Rust", "React"]);
    }

    #[test]
    fn test_create_user_validation() {
        let valid = CreateUser {
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            title: None,
            bio: None,
            skills: Vec::new(),
            social_links: HashMap::new(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = CreateUser {
            email: "not-an-email".to_string(),
            ..valid
        };
        assert!(bad_email.validate().is_err());
    }
}
