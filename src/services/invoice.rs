//! Invoice rendering for quotes.
//!
//! The invoice is a self-contained HTML document meant to be printed or
//! saved to PDF by the caller's browser.

use serde::Serialize;
use tera::Tera;

use crate::domain::quote::{Quote, QuoteItem, QuoteTotals};
use crate::models::auth::AuthenticatedUser;
use crate::repository::QuoteReader;
use crate::services::{ServiceError, ServiceResult};

const INVOICE_TEMPLATE: &str = "invoice.html";

#[derive(Serialize)]
struct InvoiceLine {
    description: String,
    quantity: i32,
    unit_price: String,
    discount_pct: f64,
    line_total: String,
}

fn cents_to_display(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, (cents % 100).abs())
}

fn line_total_cents(item: &QuoteItem) -> i64 {
    let line = i64::from(item.quantity) * item.unit_price_cents;
    line - ((line as f64) * item.discount_pct / 100.0).round() as i64
}

/// Renders the invoice HTML for a quote owned by the user's hub.
pub fn render_invoice<R>(
    repo: &R,
    user: &AuthenticatedUser,
    tera: &Tera,
    quote_id: i32,
) -> ServiceResult<String>
where
    R: QuoteReader + ?Sized,
{
    if !user.has_role(crate::SERVICE_ACCESS_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let (quote, items) = repo
        .get_quote_with_items(quote_id, user.hub_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(render(tera, &quote, &items)?)
}

fn render(tera: &Tera, quote: &Quote, items: &[QuoteItem]) -> Result<String, tera::Error> {
    let totals = QuoteTotals::compute(items);
    let lines: Vec<InvoiceLine> = items
        .iter()
        .map(|item| InvoiceLine {
            description: item.description.clone(),
            quantity: item.quantity,
            unit_price: cents_to_display(item.unit_price_cents),
            discount_pct: item.discount_pct,
            line_total: cents_to_display(line_total_cents(item)),
        })
        .collect();

    let mut context = tera::Context::new();
    context.insert("quote", quote);
    context.insert("lines", &lines);
    context.insert("subtotal", &cents_to_display(totals.subtotal_cents));
    context.insert("discount", &cents_to_display(totals.discount_cents));
    context.insert("total", &cents_to_display(totals.total_cents));
    tera.render(INVOICE_TEMPLATE, &context)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::quote::QuoteStatus;

    fn quote() -> Quote {
        let now = Utc::now().naive_utc();
        Quote {
            id: 1,
            hub_id: 1,
            opportunity_id: None,
            title: "Annual license".to_string(),
            status: QuoteStatus::Sent,
            created_at: now,
            updated_at: now,
        }
    }

    fn item(quantity: i32, unit_price_cents: i64, discount_pct: f64) -> QuoteItem {
        QuoteItem {
            id: 0,
            quote_id: 1,
            description: "Seat".to_string(),
            quantity,
            unit_price_cents,
            discount_pct,
            position: 0,
        }
    }

    #[test]
    fn invoice_shows_line_and_grand_totals() {
        let mut tera = Tera::default();
        tera.add_raw_template(
            INVOICE_TEMPLATE,
            "{{ quote.title }}|{% for l in lines %}{{ l.line_total }};{% endfor %}|{{ total }}",
        )
        .unwrap();

        let html = render(
            &tera,
            &quote(),
            &[item(2, 1000, 0.0), item(1, 5000, 10.0), item(5, 200, 0.0)],
        )
        .unwrap();

        assert_eq!(html, "Annual license|20.00;45.00;10.00;|75.00");
    }

    #[test]
    fn cents_display_pads_fractions() {
        assert_eq!(cents_to_display(5), "0.05");
        assert_eq!(cents_to_display(7500), "75.00");
        assert_eq!(cents_to_display(101), "1.01");
    }
}
