use diesel::prelude::*;

use crate::domain::quote::{NewQuote, NewQuoteItem, Quote, QuoteItem, QuoteStatus};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, QuoteReader, QuoteWriter};

impl QuoteReader for DieselRepository {
    fn get_quote_with_items(
        &self,
        id: i32,
        hub_id: i32,
    ) -> RepositoryResult<Option<(Quote, Vec<QuoteItem>)>> {
        use crate::models::quote::{Quote as DbQuote, QuoteItem as DbQuoteItem};
        use crate::schema::{quote_items, quotes};

        let mut conn = self.conn()?;
        let quote = quotes::table
            .find(id)
            .filter(quotes::hub_id.eq(hub_id))
            .first::<DbQuote>(&mut conn)
            .optional()?;

        let Some(quote) = quote else {
            return Ok(None);
        };

        let items = quote_items::table
            .filter(quote_items::quote_id.eq(quote.id))
            .order(quote_items::position.asc())
            .load::<DbQuoteItem>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(Some((quote.into(), items)))
    }

    fn list_quotes(&self, hub_id: i32) -> RepositoryResult<Vec<Quote>> {
        use crate::models::quote::Quote as DbQuote;
        use crate::schema::quotes;

        let mut conn = self.conn()?;
        let items = quotes::table
            .filter(quotes::hub_id.eq(hub_id))
            .order(quotes::id.desc())
            .load::<DbQuote>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl QuoteWriter for DieselRepository {
    fn create_quote(&self, new: &NewQuote, items: &[NewQuoteItem]) -> RepositoryResult<Quote> {
        use crate::models::quote::{
            NewQuote as DbNewQuote, NewQuoteItem as DbNewQuoteItem, Quote as DbQuote,
        };
        use crate::schema::{quote_items, quotes};

        let mut conn = self.conn()?;
        conn.transaction(|conn| {
            let insertable: DbNewQuote = new.into();
            let created = diesel::insert_into(quotes::table)
                .values(&insertable)
                .get_result::<DbQuote>(conn)?;

            let item_rows: Vec<DbNewQuoteItem> = items
                .iter()
                .map(|item| DbNewQuoteItem::from_domain(created.id, item))
                .collect();
            diesel::insert_into(quote_items::table)
                .values(&item_rows)
                .execute(conn)?;

            Ok(created.into())
        })
    }

    fn update_quote(
        &self,
        id: i32,
        hub_id: i32,
        title: &str,
        status: QuoteStatus,
        items: &[NewQuoteItem],
    ) -> RepositoryResult<Quote> {
        use crate::models::quote::{NewQuoteItem as DbNewQuoteItem, Quote as DbQuote};
        use crate::schema::{quote_items, quotes};

        let mut conn = self.conn()?;
        conn.transaction(|conn| {
            let updated = diesel::update(quotes::table.find(id).filter(quotes::hub_id.eq(hub_id)))
                .set((
                    quotes::title.eq(title),
                    quotes::status.eq(status.as_str()),
                    quotes::updated_at.eq(chrono::Utc::now().naive_utc()),
                ))
                .get_result::<DbQuote>(conn)?;

            diesel::delete(quote_items::table.filter(quote_items::quote_id.eq(id)))
                .execute(conn)?;
            let item_rows: Vec<DbNewQuoteItem> = items
                .iter()
                .map(|item| DbNewQuoteItem::from_domain(id, item))
                .collect();
            diesel::insert_into(quote_items::table)
                .values(&item_rows)
                .execute(conn)?;

            Ok(updated.into())
        })
    }

    fn delete_quote(&self, id: i32, hub_id: i32) -> RepositoryResult<()> {
        use crate::schema::{quote_items, quotes};

        let mut conn = self.conn()?;
        conn.transaction(|conn| {
            // Ownership check before the cascade so a foreign hub cannot
            // reach the line items.
            quotes::table
                .find(id)
                .filter(quotes::hub_id.eq(hub_id))
                .select(quotes::id)
                .first::<i32>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            diesel::delete(quote_items::table.filter(quote_items::quote_id.eq(id)))
                .execute(conn)?;
            diesel::delete(quotes::table.find(id)).execute(conn)?;
            Ok(())
        })
    }
}
