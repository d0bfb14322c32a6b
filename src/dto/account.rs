use serde::Deserialize;
use validator::Validate;

use crate::domain::account::{NewAccount, NewContact, UpdateAccount};

#[derive(Debug, Deserialize, Validate)]
pub struct SaveAccountRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub industry: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
}

impl SaveAccountRequest {
    pub fn to_new_account(&self, hub_id: i32) -> NewAccount {
        NewAccount::new(
            hub_id,
            self.name.clone(),
            self.industry.clone(),
            self.website.clone(),
        )
    }

    pub fn to_update(&self) -> UpdateAccount {
        UpdateAccount::new(self.name.clone(), self.industry.clone(), self.website.clone())
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddContactRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub title: Option<String>,
}

impl AddContactRequest {
    pub fn to_new_contact(&self, hub_id: i32, account_id: i32) -> NewContact {
        NewContact::new(
            hub_id,
            account_id,
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.title.clone(),
        )
    }
}
