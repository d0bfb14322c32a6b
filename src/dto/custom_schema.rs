use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::domain::custom_schema::{FieldType, NewCustomField, NewCustomObject, NewPageLayout};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateObjectRequest {
    /// Machine name, unique per hub.
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub label: String,
}

impl CreateObjectRequest {
    pub fn to_new_object(&self, hub_id: i32) -> NewCustomObject {
        NewCustomObject {
            hub_id,
            name: self.name.trim().to_lowercase(),
            label: self.label.trim().to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateObjectRequest {
    #[validate(length(min = 1))]
    pub label: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFieldRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub label: String,
    /// Must be one of the supported field types; anything else is rejected.
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub position: i32,
}

impl CreateFieldRequest {
    /// Fails when `field_type` is outside the supported set.
    pub fn to_new_field(&self, object_id: i32) -> Result<NewCustomField, String> {
        let field_type = FieldType::parse(&self.field_type)
            .ok_or_else(|| format!("unsupported field type: {}", self.field_type))?;

        Ok(NewCustomField {
            object_id,
            name: self.name.trim().to_lowercase(),
            label: self.label.trim().to_string(),
            field_type,
            required: self.required,
            options: self.options.clone(),
            position: self.position,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLayoutRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub definition: Value,
}

impl CreateLayoutRequest {
    pub fn to_new_layout(&self, object_id: i32) -> NewPageLayout {
        NewPageLayout {
            object_id,
            name: self.name.trim().to_string(),
            definition: self.definition.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_field_type_is_rejected() {
        let request = CreateFieldRequest {
            name: "Budget".to_string(),
            label: "Budget".to_string(),
            field_type: "geopoint".to_string(),
            required: false,
            options: None,
            position: 0,
        };
        assert!(request.to_new_field(1).is_err());

        let request = CreateFieldRequest {
            field_type: "select".to_string(),
            options: Some(vec!["low".to_string(), "high".to_string()]),
            ..request
        };
        let field = request.to_new_field(1).unwrap();
        assert_eq!(field.field_type, FieldType::Select);
        assert_eq!(field.name, "budget");
    }
}
