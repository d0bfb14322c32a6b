use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Marketing content page served by the CMS endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CmsPage {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub body_html: String,
    pub published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewCmsPage {
    pub slug: String,
    pub title: String,
    /// Already sanitized body HTML.
    pub body_html: String,
    pub published: bool,
}

#[derive(Clone, Debug)]
pub struct UpdateCmsPage {
    pub title: String,
    pub body_html: String,
    pub published: bool,
}

/// Normalizes a slug: lowercase, spaces to dashes, alphanumerics and dashes
/// only.
pub fn normalize_slug(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize_slug;

    #[test]
    fn slug_is_normalized() {
        assert_eq!(normalize_slug("  Hello World! "), "hello-world");
        assert_eq!(normalize_slug("Pricing"), "pricing");
    }
}
