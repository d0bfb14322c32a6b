use diesel::prelude::*;

use crate::domain::account::{Account, Contact, NewAccount, NewContact, UpdateAccount};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{AccountReader, AccountWriter, DieselRepository};

impl AccountReader for DieselRepository {
    fn get_account_by_id(&self, id: i32, hub_id: i32) -> RepositoryResult<Option<Account>> {
        use crate::models::account::Account as DbAccount;
        use crate::schema::accounts;

        let mut conn = self.conn()?;
        let account = accounts::table
            .find(id)
            .filter(accounts::hub_id.eq(hub_id))
            .first::<DbAccount>(&mut conn)
            .optional()?;

        Ok(account.map(Into::into))
    }

    fn list_accounts(&self, hub_id: i32) -> RepositoryResult<Vec<Account>> {
        use crate::models::account::Account as DbAccount;
        use crate::schema::accounts;

        let mut conn = self.conn()?;
        let items = accounts::table
            .filter(accounts::hub_id.eq(hub_id))
            .order(accounts::name.asc())
            .load::<DbAccount>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn list_contacts(&self, account_id: i32, hub_id: i32) -> RepositoryResult<Vec<Contact>> {
        use crate::models::account::Contact as DbContact;
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let items = contacts::table
            .filter(contacts::account_id.eq(account_id))
            .filter(contacts::hub_id.eq(hub_id))
            .order(contacts::id.asc())
            .load::<DbContact>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl AccountWriter for DieselRepository {
    fn create_account(&self, new_account: &NewAccount) -> RepositoryResult<Account> {
        use crate::models::account::{Account as DbAccount, NewAccount as DbNewAccount};
        use crate::schema::accounts;

        let mut conn = self.conn()?;
        let insertable: DbNewAccount = new_account.into();
        let created = diesel::insert_into(accounts::table)
            .values(&insertable)
            .get_result::<DbAccount>(&mut conn)?;

        Ok(created.into())
    }

    fn update_account(
        &self,
        id: i32,
        hub_id: i32,
        updates: &UpdateAccount,
    ) -> RepositoryResult<Account> {
        use crate::models::account::{Account as DbAccount, UpdateAccount as DbUpdateAccount};
        use crate::schema::accounts;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateAccount = updates.into();

        let updated = diesel::update(
            accounts::table
                .find(id)
                .filter(accounts::hub_id.eq(hub_id)),
        )
        .set(&db_updates)
        .get_result::<DbAccount>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_account(&self, id: i32, hub_id: i32) -> RepositoryResult<()> {
        use crate::schema::{accounts, contacts};

        let mut conn = self.conn()?;
        conn.transaction(|conn| {
            // Ownership check before the cascade so a foreign hub cannot
            // reach the contacts.
            accounts::table
                .find(id)
                .filter(accounts::hub_id.eq(hub_id))
                .select(accounts::id)
                .first::<i32>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            diesel::delete(contacts::table.filter(contacts::account_id.eq(id))).execute(conn)?;
            diesel::delete(accounts::table.find(id)).execute(conn)?;
            Ok(())
        })
    }

    fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact> {
        use crate::models::account::{Contact as DbContact, NewContact as DbNewContact};
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let insertable: DbNewContact = new_contact.into();
        let created = diesel::insert_into(contacts::table)
            .values(&insertable)
            .get_result::<DbContact>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_contact(&self, id: i32, hub_id: i32) -> RepositoryResult<()> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        diesel::delete(contacts::table.find(id).filter(contacts::hub_id.eq(hub_id)))
            .execute(&mut conn)?;
        Ok(())
    }
}
