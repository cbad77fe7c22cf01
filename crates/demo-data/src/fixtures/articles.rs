//! Demo tags and articles.

use serde::{Deserialize, Serialize};

pub(crate) const DRF_INTRO: &str = "Getting Started with Django REST Framework";
pub(crate) const ANGULAR_PRACTICES: &str = "Angular Best Practices 2024";
pub(crate) const FULL_STACK_GUIDE: &str = "Building a Full-Stack App with Django and Angular";
pub(crate) const PYTHON_TIPS: &str = "Python Tips for Django Developers";
pub(crate) const DJANGO_ORM: &str = "Understanding Django ORM";

/// An article whose author and tags are referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleFixture {
    pub title: String,
    pub description: String,
    pub body: String,
    /// Username of the author.
    pub author: String,
    /// Tag names, in display order.
    pub tags: Vec<String>,
}

impl ArticleFixture {
    pub fn new(title: &str, description: &str, body: &str, author: &str, tags: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            body: body.to_string(),
            author: author.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

pub fn demo_tags() -> Vec<String> {
    ["django", "python", "angular", "webdev", "api"]
        .iter()
        .map(|t| t.to_string())
        .collect()
}

pub fn demo_articles() -> Vec<ArticleFixture> {
    vec![
        ArticleFixture::new(
            DRF_INTRO,
            "Learn how to build RESTful APIs with Django",
            "Django REST Framework is a powerful toolkit for building Web APIs. \
             It provides features like serialization, authentication, and viewsets...",
            "john",
            &["django", "python", "api"],
        ),
        ArticleFixture::new(
            ANGULAR_PRACTICES,
            "Modern Angular development tips and tricks",
            "Angular has evolved significantly. Here are the best practices \
             for building scalable applications in 2024...",
            "jane",
            &["angular", "webdev"],
        ),
        ArticleFixture::new(
            FULL_STACK_GUIDE,
            "Complete guide to integrating Django backend with Angular frontend",
            "This tutorial covers everything you need to know about building \
             a modern full-stack application...",
            "bob",
            &["django", "angular", "webdev"],
        ),
        ArticleFixture::new(
            PYTHON_TIPS,
            "Advanced Python techniques for better Django code",
            "Learn advanced Python concepts that will make your Django code \
             more efficient and maintainable...",
            "john",
            &["python", "django"],
        ),
        ArticleFixture::new(
            DJANGO_ORM,
            "Deep dive into Django's database abstraction layer",
            "The Django ORM provides a powerful way to interact with databases. \
             Let's explore its features in detail...",
            "bob",
            &["django", "python"],
        ),
    ]
}
