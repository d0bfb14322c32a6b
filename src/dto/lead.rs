use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;
use validator::Validate;

use crate::domain::lead::{LeadStatus, NewLead, UpdateLead};

#[derive(MultipartForm)]
pub struct UploadLeadsForm {
    #[multipart(limit = "10MB")]
    pub csv: TempFile,
}

/// Query parameters accepted by the leads list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListLeadsQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub page: Option<usize>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SaveLeadRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub unsubscribed: bool,
}

impl SaveLeadRequest {
    pub fn to_new_lead(&self, hub_id: i32) -> NewLead {
        NewLead::new(
            hub_id,
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.company.clone(),
        )
    }

    pub fn to_update(&self) -> UpdateLead {
        UpdateLead::new(
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.company.clone(),
            self.status,
            self.unsubscribed,
        )
    }
}
