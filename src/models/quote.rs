use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::quote::{
    NewQuote as DomainNewQuote, NewQuoteItem as DomainNewQuoteItem, Quote as DomainQuote,
    QuoteItem as DomainQuoteItem, QuoteStatus,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::quotes)]
pub struct Quote {
    pub id: i32,
    pub hub_id: i32,
    pub opportunity_id: Option<i32>,
    pub title: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::quotes)]
pub struct NewQuote<'a> {
    pub hub_id: i32,
    pub opportunity_id: Option<i32>,
    pub title: &'a str,
    pub status: &'a str,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Quote, foreign_key = quote_id))]
#[diesel(table_name = crate::schema::quote_items)]
pub struct QuoteItem {
    pub id: i32,
    pub quote_id: i32,
    pub description: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub discount_pct: f64,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::quote_items)]
pub struct NewQuoteItem<'a> {
    pub quote_id: i32,
    pub description: &'a str,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub discount_pct: f64,
    pub position: i32,
}

impl From<Quote> for DomainQuote {
    fn from(q: Quote) -> Self {
        Self {
            id: q.id,
            hub_id: q.hub_id,
            opportunity_id: q.opportunity_id,
            title: q.title,
            status: QuoteStatus::from(q.status.as_str()),
            created_at: q.created_at,
            updated_at: q.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewQuote> for NewQuote<'a> {
    fn from(q: &'a DomainNewQuote) -> Self {
        Self {
            hub_id: q.hub_id,
            opportunity_id: q.opportunity_id,
            title: q.title.as_str(),
            status: q.status.as_str(),
        }
    }
}

impl From<QuoteItem> for DomainQuoteItem {
    fn from(item: QuoteItem) -> Self {
        Self {
            id: item.id,
            quote_id: item.quote_id,
            description: item.description,
            quantity: item.quantity,
            unit_price_cents: item.unit_price_cents,
            discount_pct: item.discount_pct,
            position: item.position,
        }
    }
}

impl<'a> NewQuoteItem<'a> {
    pub fn from_domain(quote_id: i32, item: &'a DomainNewQuoteItem) -> Self {
        Self {
            quote_id,
            description: item.description.as_str(),
            quantity: item.quantity,
            unit_price_cents: item.unit_price_cents,
            discount_pct: item.discount_pct,
            position: item.position,
        }
    }
}
