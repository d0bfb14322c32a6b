use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SavePageRequest {
    #[validate(length(min = 1))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub body_html: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListPagesQuery {
    #[serde(default)]
    pub include_drafts: bool,
}

/// Query parameters for the Open Graph image endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct OgImageQuery {
    pub title: Option<String>,
    pub subtitle: Option<String>,
}
