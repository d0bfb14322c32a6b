use diesel::prelude::*;

use crate::domain::cms::{CmsPage, NewCmsPage, UpdateCmsPage};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CmsReader, CmsWriter, DieselRepository};

impl CmsReader for DieselRepository {
    fn get_page_by_slug(&self, slug: &str) -> RepositoryResult<Option<CmsPage>> {
        use crate::models::cms::CmsPage as DbCmsPage;
        use crate::schema::cms_pages;

        let mut conn = self.conn()?;
        let page = cms_pages::table
            .filter(cms_pages::slug.eq(slug))
            .first::<DbCmsPage>(&mut conn)
            .optional()?;

        Ok(page.map(Into::into))
    }

    fn list_pages(&self, published_only: bool) -> RepositoryResult<Vec<CmsPage>> {
        use crate::models::cms::CmsPage as DbCmsPage;
        use crate::schema::cms_pages;

        let mut conn = self.conn()?;
        let mut query = cms_pages::table.into_boxed();
        if published_only {
            query = query.filter(cms_pages::published.eq(true));
        }

        let items = query
            .order(cms_pages::slug.asc())
            .load::<DbCmsPage>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl CmsWriter for DieselRepository {
    fn create_page(&self, new: &NewCmsPage) -> RepositoryResult<CmsPage> {
        use crate::models::cms::{CmsPage as DbCmsPage, NewCmsPage as DbNewCmsPage};
        use crate::schema::cms_pages;

        let mut conn = self.conn()?;
        let insertable: DbNewCmsPage = new.into();
        let created = diesel::insert_into(cms_pages::table)
            .values(&insertable)
            .get_result::<DbCmsPage>(&mut conn)?;

        Ok(created.into())
    }

    fn update_page(&self, id: i32, updates: &UpdateCmsPage) -> RepositoryResult<CmsPage> {
        use crate::models::cms::{CmsPage as DbCmsPage, UpdateCmsPage as DbUpdateCmsPage};
        use crate::schema::cms_pages;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateCmsPage = updates.into();

        let updated = diesel::update(cms_pages::table.find(id))
            .set(&db_updates)
            .get_result::<DbCmsPage>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_page(&self, id: i32) -> RepositoryResult<()> {
        use crate::schema::cms_pages;

        let mut conn = self.conn()?;
        diesel::delete(cms_pages::table.find(id)).execute(&mut conn)?;
        Ok(())
    }
}
