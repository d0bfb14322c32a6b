//! Quote aggregate and its line-item arithmetic.
//!
//! Money is carried in integer cents; per-line discounts are rounded to the
//! nearest cent before summing so that totals are stable regardless of item
//! order.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    #[default]
    Draft,
    Sent,
    Accepted,
    Declined,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Draft => "draft",
            QuoteStatus::Sent => "sent",
            QuoteStatus::Accepted => "accepted",
            QuoteStatus::Declined => "declined",
        }
    }
}

impl From<&str> for QuoteStatus {
    fn from(s: &str) -> Self {
        match s {
            "sent" => QuoteStatus::Sent,
            "accepted" => QuoteStatus::Accepted,
            "declined" => QuoteStatus::Declined,
            _ => QuoteStatus::Draft,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub id: i32,
    pub hub_id: i32,
    pub opportunity_id: Option<i32>,
    pub title: String,
    pub status: QuoteStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct QuoteItem {
    pub id: i32,
    pub quote_id: i32,
    pub description: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
    /// Percentage discount applied to the line, 0..=100.
    pub discount_pct: f64,
    pub position: i32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewQuote {
    pub hub_id: i32,
    pub opportunity_id: Option<i32>,
    pub title: String,
    pub status: QuoteStatus,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewQuoteItem {
    pub description: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub discount_pct: f64,
    pub position: i32,
}

/// Computed totals for a set of quote line items.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Default)]
pub struct QuoteTotals {
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
}

impl QuoteTotals {
    /// subtotal = Σ(qty × unit price); discount = Σ(qty × unit price ×
    /// discount / 100); total = subtotal − discount. Empty input yields
    /// all-zero totals.
    pub fn compute(items: &[QuoteItem]) -> Self {
        let mut subtotal: i64 = 0;
        let mut discount: i64 = 0;
        for item in items {
            let line = i64::from(item.quantity) * item.unit_price_cents;
            subtotal += line;
            discount += ((line as f64) * item.discount_pct / 100.0).round() as i64;
        }
        Self {
            subtotal_cents: subtotal,
            discount_cents: discount,
            total_cents: subtotal - discount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i32, unit_price_cents: i64, discount_pct: f64) -> QuoteItem {
        QuoteItem {
            id: 0,
            quote_id: 0,
            description: String::new(),
            quantity,
            unit_price_cents,
            discount_pct,
            position: 0,
        }
    }

    #[test]
    fn empty_item_list_totals_zero() {
        assert_eq!(QuoteTotals::compute(&[]), QuoteTotals::default());
    }

    #[test]
    fn worked_example_matches() {
        // qty 2 @ $10 (0%), qty 1 @ $50 (10%), qty 5 @ $2 (0%)
        let items = vec![item(2, 1000, 0.0), item(1, 5000, 10.0), item(5, 200, 0.0)];
        let totals = QuoteTotals::compute(&items);
        assert_eq!(totals.subtotal_cents, 8000);
        assert_eq!(totals.discount_cents, 500);
        assert_eq!(totals.total_cents, 7500);
    }

    #[test]
    fn full_discount_zeroes_the_line() {
        let totals = QuoteTotals::compute(&[item(3, 999, 100.0)]);
        assert_eq!(totals.subtotal_cents, 2997);
        assert_eq!(totals.discount_cents, 2997);
        assert_eq!(totals.total_cents, 0);
    }

    #[test]
    fn fractional_discount_rounds_per_line() {
        // 1 @ $0.99 with 33% -> 32.67 cents, rounds to 33.
        let totals = QuoteTotals::compute(&[item(1, 99, 33.0)]);
        assert_eq!(totals.discount_cents, 33);
        assert_eq!(totals.total_cents, 66);
    }
}
