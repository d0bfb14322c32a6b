use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::quote::{NewQuote, NewQuoteItem, Quote, QuoteItem, QuoteStatus, QuoteTotals};

#[derive(Debug, Deserialize, Validate)]
pub struct QuoteItemRequest {
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[validate(range(min = 0))]
    pub unit_price_cents: i64,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default)]
    pub discount_pct: f64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SaveQuoteRequest {
    #[validate(length(min = 1))]
    pub title: String,
    pub opportunity_id: Option<i32>,
    #[serde(default)]
    pub status: QuoteStatus,
    #[validate(nested)]
    pub items: Vec<QuoteItemRequest>,
}

impl SaveQuoteRequest {
    pub fn to_new_quote(&self, hub_id: i32) -> NewQuote {
        NewQuote {
            hub_id,
            opportunity_id: self.opportunity_id,
            title: self.title.trim().to_string(),
            status: self.status,
        }
    }

    /// Line positions come from request order.
    pub fn to_items(&self) -> Vec<NewQuoteItem> {
        self.items
            .iter()
            .enumerate()
            .map(|(position, item)| NewQuoteItem {
                description: item.description.trim().to_string(),
                quantity: item.quantity,
                unit_price_cents: item.unit_price_cents,
                discount_pct: item.discount_pct,
                position: position as i32,
            })
            .collect()
    }
}

/// Quote payload returned to the caller, totals included.
#[derive(Serialize)]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub quote: Quote,
    pub items: Vec<QuoteItem>,
    pub totals: QuoteTotals,
}

impl QuoteResponse {
    pub fn new(quote: Quote, items: Vec<QuoteItem>) -> Self {
        let totals = QuoteTotals::compute(&items);
        Self {
            quote,
            items,
            totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_positions_follow_request_order() {
        let request = SaveQuoteRequest {
            title: "Q".to_string(),
            opportunity_id: None,
            status: QuoteStatus::Draft,
            items: vec![
                QuoteItemRequest {
                    description: "A".to_string(),
                    quantity: 1,
                    unit_price_cents: 100,
                    discount_pct: 0.0,
                },
                QuoteItemRequest {
                    description: "B".to_string(),
                    quantity: 2,
                    unit_price_cents: 200,
                    discount_pct: 5.0,
                },
            ],
        };

        let items = request.to_items();
        assert_eq!(items[0].position, 0);
        assert_eq!(items[1].position, 1);
        assert_eq!(items[1].discount_pct, 5.0);
    }

    #[test]
    fn discount_outside_percent_range_fails_validation() {
        let request = SaveQuoteRequest {
            title: "Q".to_string(),
            opportunity_id: None,
            status: QuoteStatus::Draft,
            items: vec![QuoteItemRequest {
                description: "A".to_string(),
                quantity: 1,
                unit_price_cents: 100,
                discount_pct: 120.0,
            }],
        };
        assert!(request.validate().is_err());
    }
}
