//! Demo user accounts.

use serde::{Deserialize, Serialize};

/// Plaintext password shared by every demo account.
pub const DEMO_PASSWORD: &str = "password123";

/// A user account before its password is hashed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFixture {
    pub username: String,
    pub email: String,
    pub password: String,
    pub bio: String,
    pub image: Option<String>,
}

impl UserFixture {
    /// Creates a user with the demo password and no avatar.
    pub fn new(username: &str, email: &str, bio: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            password: DEMO_PASSWORD.to_string(),
            bio: bio.to_string(),
            image: None,
        }
    }
}

pub fn demo_users() -> Vec<UserFixture> {
    vec![
        UserFixture::new(
            "john",
            "john@example.com",
            "Backend developer passionate about Django",
        ),
        UserFixture::new(
            "jane",
            "jane@example.com",
            "Frontend developer specializing in Angular",
        ),
        UserFixture::new("bob", "bob@example.com", "Full-stack developer"),
    ]
}
