use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{normalize_opt, normalize_opt_email, normalize_opt_phone};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: i32,
    pub hub_id: i32,
    pub name: String,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewAccount {
    pub hub_id: i32,
    pub name: String,
    pub industry: Option<String>,
    pub website: Option<String>,
}

impl NewAccount {
    #[must_use]
    pub fn new(hub_id: i32, name: String, industry: Option<String>, website: Option<String>) -> Self {
        Self {
            hub_id,
            name: name.trim().to_string(),
            industry: normalize_opt(industry),
            website: normalize_opt(website),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateAccount {
    pub name: String,
    pub industry: Option<String>,
    pub website: Option<String>,
}

impl UpdateAccount {
    #[must_use]
    pub fn new(name: String, industry: Option<String>, website: Option<String>) -> Self {
        Self {
            name: name.trim().to_string(),
            industry: normalize_opt(industry),
            website: normalize_opt(website),
        }
    }
}

/// Person attached to an account.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub id: i32,
    pub hub_id: i32,
    pub account_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewContact {
    pub hub_id: i32,
    pub account_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub title: Option<String>,
}

impl NewContact {
    #[must_use]
    pub fn new(
        hub_id: i32,
        account_id: i32,
        name: String,
        email: Option<String>,
        phone: Option<String>,
        title: Option<String>,
    ) -> Self {
        Self {
            hub_id,
            account_id,
            name: name.trim().to_string(),
            email: normalize_opt_email(email),
            phone: normalize_opt_phone(phone),
            title: normalize_opt(title),
        }
    }
}
