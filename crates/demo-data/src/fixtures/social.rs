//! Follows, favorites, and comments between the demo users and articles.

use serde::{Deserialize, Serialize};

use super::articles::{ANGULAR_PRACTICES, DRF_INTRO, FULL_STACK_GUIDE, PYTHON_TIPS};

/// Directed follow edge between two usernames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowFixture {
    pub follower: String,
    pub followed: String,
}

/// A user favoriting an article, referenced by title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteFixture {
    pub user: String,
    pub article: String,
}

/// A comment on an article, referenced by title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentFixture {
    pub article: String,
    pub author: String,
    pub body: String,
}

fn follow(follower: &str, followed: &str) -> FollowFixture {
    FollowFixture {
        follower: follower.to_string(),
        followed: followed.to_string(),
    }
}

fn favorite(user: &str, article: &str) -> FavoriteFixture {
    FavoriteFixture {
        user: user.to_string(),
        article: article.to_string(),
    }
}

fn comment(article: &str, author: &str, body: &str) -> CommentFixture {
    CommentFixture {
        article: article.to_string(),
        author: author.to_string(),
        body: body.to_string(),
    }
}

pub fn demo_follows() -> Vec<FollowFixture> {
    vec![
        follow("john", "jane"),
        follow("jane", "john"),
        follow("jane", "bob"),
        follow("bob", "jane"),
    ]
}

pub fn demo_favorites() -> Vec<FavoriteFixture> {
    vec![
        favorite("jane", DRF_INTRO),
        favorite("jane", FULL_STACK_GUIDE),
        favorite("john", ANGULAR_PRACTICES),
        favorite("john", FULL_STACK_GUIDE),
        favorite("bob", DRF_INTRO),
        favorite("bob", ANGULAR_PRACTICES),
    ]
}

pub fn demo_comments() -> Vec<CommentFixture> {
    vec![
        comment(DRF_INTRO, "jane", "Great article! Very helpful."),
        comment(
            DRF_INTRO,
            "bob",
            "Thanks for sharing. Looking forward to more!",
        ),
        comment(
            ANGULAR_PRACTICES,
            "john",
            "Excellent tips, will try these out.",
        ),
        comment(ANGULAR_PRACTICES, "bob", "Very comprehensive guide!"),
        comment(FULL_STACK_GUIDE, "john", "This is exactly what I needed."),
        comment(FULL_STACK_GUIDE, "jane", "Well explained!"),
        comment(PYTHON_TIPS, "jane", "Mind = blown. Thanks!"),
    ]
}
