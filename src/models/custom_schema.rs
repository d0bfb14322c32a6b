use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::custom_schema::{
    CustomField as DomainCustomField, CustomObject as DomainCustomObject, FieldType,
    NewCustomField as DomainNewCustomField, NewCustomObject as DomainNewCustomObject,
    NewPageLayout as DomainNewPageLayout, PageLayout as DomainPageLayout,
};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::custom_objects)]
pub struct CustomObject {
    pub id: i32,
    pub hub_id: i32,
    pub name: String,
    pub label: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::custom_objects)]
pub struct NewCustomObject<'a> {
    pub hub_id: i32,
    pub name: &'a str,
    pub label: &'a str,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(CustomObject, foreign_key = object_id))]
#[diesel(table_name = crate::schema::custom_fields)]
pub struct CustomField {
    pub id: i32,
    pub object_id: i32,
    pub name: String,
    pub label: String,
    pub field_type: String,
    pub required: bool,
    pub options: Option<String>,
    pub position: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::custom_fields)]
pub struct NewCustomField {
    pub object_id: i32,
    pub name: String,
    pub label: String,
    pub field_type: String,
    pub required: bool,
    pub options: Option<String>,
    pub position: i32,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(CustomObject, foreign_key = object_id))]
#[diesel(table_name = crate::schema::page_layouts)]
pub struct PageLayout {
    pub id: i32,
    pub object_id: i32,
    pub name: String,
    pub definition: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::page_layouts)]
pub struct NewPageLayout {
    pub object_id: i32,
    pub name: String,
    pub definition: String,
}

impl From<CustomObject> for DomainCustomObject {
    fn from(object: CustomObject) -> Self {
        Self {
            id: object.id,
            hub_id: object.hub_id,
            name: object.name,
            label: object.label,
            created_at: object.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewCustomObject> for NewCustomObject<'a> {
    fn from(object: &'a DomainNewCustomObject) -> Self {
        Self {
            hub_id: object.hub_id,
            name: object.name.as_str(),
            label: object.label.as_str(),
        }
    }
}

impl TryFrom<CustomField> for DomainCustomField {
    type Error = TypeConstraintError;

    fn try_from(field: CustomField) -> Result<Self, Self::Error> {
        // Stored rows always originate from the fixed enumeration; treat an
        // unknown value as data corruption.
        let field_type = FieldType::parse(&field.field_type)
            .ok_or_else(|| TypeConstraintError::InvalidValue(field.field_type.clone()))?;
        let options = field
            .options
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok());
        Ok(Self {
            id: field.id,
            object_id: field.object_id,
            name: field.name,
            label: field.label,
            field_type,
            required: field.required,
            options,
            position: field.position,
            created_at: field.created_at,
        })
    }
}

impl From<&DomainNewCustomField> for NewCustomField {
    fn from(field: &DomainNewCustomField) -> Self {
        Self {
            object_id: field.object_id,
            name: field.name.clone(),
            label: field.label.clone(),
            field_type: field.field_type.as_str().to_string(),
            required: field.required,
            options: field
                .options
                .as_ref()
                .and_then(|opts| serde_json::to_string(opts).ok()),
            position: field.position,
        }
    }
}

impl From<PageLayout> for DomainPageLayout {
    fn from(layout: PageLayout) -> Self {
        let definition = serde_json::from_str(&layout.definition).unwrap_or_default();
        Self {
            id: layout.id,
            object_id: layout.object_id,
            name: layout.name,
            definition,
            created_at: layout.created_at,
        }
    }
}

impl From<&DomainNewPageLayout> for NewPageLayout {
    fn from(layout: &DomainNewPageLayout) -> Self {
        Self {
            object_id: layout.object_id,
            name: layout.name.clone(),
            definition: layout.definition.to_string(),
        }
    }
}
