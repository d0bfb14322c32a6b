use diesel::prelude::*;

use crate::domain::custom_schema::{
    CustomField, CustomObject, NewCustomField, NewCustomObject, NewPageLayout, PageLayout,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomSchemaReader, CustomSchemaWriter, DieselRepository};

impl CustomSchemaReader for DieselRepository {
    fn get_object_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<CustomObject>> {
        use crate::models::custom_schema::CustomObject as DbCustomObject;
        use crate::schema::custom_objects;

        let mut conn = self.conn()?;
        let object = custom_objects::table
            .find(id)
            .filter(custom_objects::hub_id.eq(hub_id))
            .first::<DbCustomObject>(&mut conn)
            .optional()?;

        Ok(object.map(Into::into))
    }

    fn list_objects(&self, hub_id: i32) -> RepositoryResult<Vec<CustomObject>> {
        use crate::models::custom_schema::CustomObject as DbCustomObject;
        use crate::schema::custom_objects;

        let mut conn = self.conn()?;
        let items = custom_objects::table
            .filter(custom_objects::hub_id.eq(hub_id))
            .order(custom_objects::name.asc())
            .load::<DbCustomObject>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn list_fields(&self, object_id: i32) -> RepositoryResult<Vec<CustomField>> {
        use crate::models::custom_schema::CustomField as DbCustomField;
        use crate::schema::custom_fields;

        let mut conn = self.conn()?;
        custom_fields::table
            .filter(custom_fields::object_id.eq(object_id))
            .order(custom_fields::position.asc())
            .load::<DbCustomField>(&mut conn)?
            .into_iter()
            .map(|row| CustomField::try_from(row).map_err(RepositoryError::from))
            .collect()
    }

    fn list_layouts(&self, object_id: i32) -> RepositoryResult<Vec<PageLayout>> {
        use crate::models::custom_schema::PageLayout as DbPageLayout;
        use crate::schema::page_layouts;

        let mut conn = self.conn()?;
        let items = page_layouts::table
            .filter(page_layouts::object_id.eq(object_id))
            .order(page_layouts::id.asc())
            .load::<DbPageLayout>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl CustomSchemaWriter for DieselRepository {
    fn create_object(&self, new: &NewCustomObject) -> RepositoryResult<CustomObject> {
        use crate::models::custom_schema::{
            CustomObject as DbCustomObject, NewCustomObject as DbNewCustomObject,
        };
        use crate::schema::custom_objects;

        let mut conn = self.conn()?;
        let insertable: DbNewCustomObject = new.into();
        let created = diesel::insert_into(custom_objects::table)
            .values(&insertable)
            .get_result::<DbCustomObject>(&mut conn)?;

        Ok(created.into())
    }

    fn update_object_label(
        &self,
        id: i32,
        hub_id: i32,
        label: &str,
    ) -> RepositoryResult<CustomObject> {
        use crate::models::custom_schema::CustomObject as DbCustomObject;
        use crate::schema::custom_objects;

        let mut conn = self.conn()?;
        let updated = diesel::update(
            custom_objects::table
                .find(id)
                .filter(custom_objects::hub_id.eq(hub_id)),
        )
        .set(custom_objects::label.eq(label))
        .get_result::<DbCustomObject>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_object(&self, id: i32, hub_id: i32) -> RepositoryResult<()> {
        use crate::schema::{custom_fields, custom_objects, page_layouts};

        let mut conn = self.conn()?;
        conn.transaction(|conn| {
            // Ownership check before the cascade so a foreign hub cannot
            // reach the fields and layouts.
            custom_objects::table
                .find(id)
                .filter(custom_objects::hub_id.eq(hub_id))
                .select(custom_objects::id)
                .first::<i32>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            diesel::delete(custom_fields::table.filter(custom_fields::object_id.eq(id)))
                .execute(conn)?;
            diesel::delete(page_layouts::table.filter(page_layouts::object_id.eq(id)))
                .execute(conn)?;
            diesel::delete(custom_objects::table.find(id)).execute(conn)?;
            Ok(())
        })
    }

    fn create_field(&self, new: &NewCustomField) -> RepositoryResult<CustomField> {
        use crate::models::custom_schema::{
            CustomField as DbCustomField, NewCustomField as DbNewCustomField,
        };
        use crate::schema::custom_fields;

        let mut conn = self.conn()?;
        let insertable: DbNewCustomField = new.into();
        let created = diesel::insert_into(custom_fields::table)
            .values(&insertable)
            .get_result::<DbCustomField>(&mut conn)?;

        Ok(CustomField::try_from(created)?)
    }

    fn delete_field(&self, id: i32, object_id: i32) -> RepositoryResult<()> {
        use crate::schema::custom_fields;

        let mut conn = self.conn()?;
        let affected = diesel::delete(
            custom_fields::table
                .find(id)
                .filter(custom_fields::object_id.eq(object_id)),
        )
        .execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn create_layout(&self, new: &NewPageLayout) -> RepositoryResult<PageLayout> {
        use crate::models::custom_schema::{
            NewPageLayout as DbNewPageLayout, PageLayout as DbPageLayout,
        };
        use crate::schema::page_layouts;

        let mut conn = self.conn()?;
        let insertable: DbNewPageLayout = new.into();
        let created = diesel::insert_into(page_layouts::table)
            .values(&insertable)
            .get_result::<DbPageLayout>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_layout(&self, id: i32, object_id: i32) -> RepositoryResult<()> {
        use crate::schema::page_layouts;

        let mut conn = self.conn()?;
        let affected = diesel::delete(
            page_layouts::table
                .find(id)
                .filter(page_layouts::object_id.eq(object_id)),
        )
        .execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
