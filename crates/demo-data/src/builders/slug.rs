//! URL slugs for article titles.

use std::collections::HashSet;

/// Lowercases a title and joins its ASCII alphanumeric runs with `-`.
///
/// Non-ASCII characters are not transliterated; they act as separators, so
/// `"Déjà vu"` becomes `"d-j-vu"`. Titles without any ASCII alphanumerics
/// become `"article"`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        slug.push_str("article");
    }
    slug
}

/// Hands out slugs that are unique within one dataset.
#[derive(Debug, Default)]
pub struct SlugAllocator {
    taken: HashSet<String>,
}

impl SlugAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slug for `title`, suffixed `-2`, `-3`, ... on collision.
    pub fn allocate(&mut self, title: &str) -> String {
        let base = slugify(title);
        if self.taken.insert(base.clone()) {
            return base;
        }

        let mut n = 2;
        loop {
            let candidate = format!("{base}-{n}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(
            slugify("Getting Started with Django REST Framework"),
            "getting-started-with-django-rest-framework"
        );
        assert_eq!(
            slugify("Building a Full-Stack App with Django and Angular"),
            "building-a-full-stack-app-with-django-and-angular"
        );
        assert_eq!(slugify("Angular Best Practices 2024"), "angular-best-practices-2024");
    }

    #[test]
    fn test_slugify_edges() {
        assert_eq!(slugify("  --Hello,   World!--  "), "hello-world");
        assert_eq!(slugify("Déjà vu"), "d-j-vu");
        assert_eq!(slugify("!!!"), "article");
        assert_eq!(slugify(""), "article");
    }

    #[test]
    fn test_allocator_suffixes_collisions() {
        let mut slugs = SlugAllocator::new();
        assert_eq!(slugs.allocate("Hello World"), "hello-world");
        assert_eq!(slugs.allocate("Hello, World"), "hello-world-2");
        assert_eq!(slugs.allocate("hello world!"), "hello-world-3");
        assert_eq!(slugs.allocate("Hello World 2"), "hello-world-2-2");
    }
}
