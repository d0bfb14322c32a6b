use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::account::{
    Account as DomainAccount, Contact as DomainContact, NewAccount as DomainNewAccount,
    NewContact as DomainNewContact, UpdateAccount as DomainUpdateAccount,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::accounts)]
pub struct Account {
    pub id: i32,
    pub hub_id: i32,
    pub name: String,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::accounts)]
pub struct NewAccount<'a> {
    pub hub_id: i32,
    pub name: &'a str,
    pub industry: Option<&'a str>,
    pub website: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::accounts)]
pub struct UpdateAccount<'a> {
    pub name: &'a str,
    pub industry: Option<&'a str>,
    pub website: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Account, foreign_key = account_id))]
#[diesel(table_name = crate::schema::contacts)]
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::contacts)]
pub struct NewContact<'a> {
    pub hub_id: i32,
    pub account_id: i32,
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub title: Option<&'a str>,
}

impl From<Account> for DomainAccount {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            hub_id: account.hub_id,
            name: account.name,
            industry: account.industry,
            website: account.website,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewAccount> for NewAccount<'a> {
    fn from(account: &'a DomainNewAccount) -> Self {
        Self {
            hub_id: account.hub_id,
            name: account.name.as_str(),
            industry: account.industry.as_deref(),
            website: account.website.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateAccount> for UpdateAccount<'a> {
    fn from(account: &'a DomainUpdateAccount) -> Self {
        Self {
            name: account.name.as_str(),
            industry: account.industry.as_deref(),
            website: account.website.as_deref(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<Contact> for DomainContact {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            hub_id: contact.hub_id,
            account_id: contact.account_id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            title: contact.title,
            created_at: contact.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewContact> for NewContact<'a> {
    fn from(contact: &'a DomainNewContact) -> Self {
        Self {
            hub_id: contact.hub_id,
            account_id: contact.account_id,
            name: contact.name.as_str(),
            email: contact.email.as_deref(),
            phone: contact.phone.as_deref(),
            title: contact.title.as_deref(),
        }
    }
}
