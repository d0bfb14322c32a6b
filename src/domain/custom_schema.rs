//! Declarative custom objects, fields and page layouts.
//!
//! These rows drive form rendering only; no migration engine runs behind
//! them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed enumeration of supported custom field types. Anything else is
/// rejected at the DTO boundary.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Boolean,
    Select,
    Multiselect,
    Email,
    Phone,
    Url,
    Textarea,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Boolean => "boolean",
            FieldType::Select => "select",
            FieldType::Multiselect => "multiselect",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Url => "url",
            FieldType::Textarea => "textarea",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(FieldType::Text),
            "number" => Some(FieldType::Number),
            "date" => Some(FieldType::Date),
            "boolean" => Some(FieldType::Boolean),
            "select" => Some(FieldType::Select),
            "multiselect" => Some(FieldType::Multiselect),
            "email" => Some(FieldType::Email),
            "phone" => Some(FieldType::Phone),
            "url" => Some(FieldType::Url),
            "textarea" => Some(FieldType::Textarea),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CustomObject {
    pub id: i32,
    pub hub_id: i32,
    /// Machine name, unique per hub.
    pub name: String,
    pub label: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCustomObject {
    pub hub_id: i32,
    pub name: String,
    pub label: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CustomField {
    pub id: i32,
    pub object_id: i32,
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    /// Choice values for select/multiselect fields.
    pub options: Option<Vec<String>>,
    pub position: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCustomField {
    pub object_id: i32,
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    pub options: Option<Vec<String>>,
    pub position: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PageLayout {
    pub id: i32,
    pub object_id: i32,
    pub name: String,
    /// Arbitrary layout description maintained by the admin UI.
    pub definition: Value,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPageLayout {
    pub object_id: i32,
    pub name: String,
    pub definition: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_parses_the_fixed_set_only() {
        assert_eq!(FieldType::parse("select"), Some(FieldType::Select));
        assert_eq!(FieldType::parse("textarea"), Some(FieldType::Textarea));
        assert_eq!(FieldType::parse("geopoint"), None);
        assert_eq!(FieldType::parse(""), None);
    }

    #[test]
    fn field_type_round_trips() {
        for ft in [
            FieldType::Text,
            FieldType::Number,
            FieldType::Date,
            FieldType::Boolean,
            FieldType::Select,
            FieldType::Multiselect,
            FieldType::Email,
            FieldType::Phone,
            FieldType::Url,
            FieldType::Textarea,
        ] {
            assert_eq!(FieldType::parse(ft.as_str()), Some(ft));
        }
    }
}
