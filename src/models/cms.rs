use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::cms::{
    CmsPage as DomainCmsPage, NewCmsPage as DomainNewCmsPage, UpdateCmsPage as DomainUpdateCmsPage,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::cms_pages)]
pub struct CmsPage {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub body_html: String,
    pub published: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::cms_pages)]
pub struct NewCmsPage<'a> {
    pub slug: &'a str,
    pub title: &'a str,
    pub body_html: &'a str,
    pub published: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::cms_pages)]
pub struct UpdateCmsPage<'a> {
    pub title: &'a str,
    pub body_html: &'a str,
    pub published: bool,
    pub updated_at: NaiveDateTime,
}

impl From<CmsPage> for DomainCmsPage {
    fn from(page: CmsPage) -> Self {
        Self {
            id: page.id,
            slug: page.slug,
            title: page.title,
            body_html: page.body_html,
            published: page.published,
            created_at: page.created_at,
            updated_at: page.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCmsPage> for NewCmsPage<'a> {
    fn from(page: &'a DomainNewCmsPage) -> Self {
        Self {
            slug: page.slug.as_str(),
            title: page.title.as_str(),
            body_html: page.body_html.as_str(),
            published: page.published,
        }
    }
}

impl<'a> From<&'a DomainUpdateCmsPage> for UpdateCmsPage<'a> {
    fn from(page: &'a DomainUpdateCmsPage) -> Self {
        Self {
            title: page.title.as_str(),
            body_html: page.body_html.as_str(),
            published: page.published,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
