use chrono::Utc;
use diesel::prelude::*;

use orbit_crm::domain::activity::{ActivityType, NewActivityLog};
use orbit_crm::domain::cms::NewCmsPage;
use orbit_crm::domain::custom_schema::{FieldType, NewCustomField, NewCustomObject};
use orbit_crm::domain::lead::{LeadStatus, NewLead, OutreachUpdate, UpdateLead};
use orbit_crm::domain::plan::{NewPlan, UpdatePlan};
use orbit_crm::domain::quote::{NewQuote, NewQuoteItem, QuoteStatus};
use orbit_crm::repository::errors::RepositoryError;
use orbit_crm::repository::{
    ActivityReader, ActivityWriter, CmsReader, CmsWriter, CustomSchemaReader, CustomSchemaWriter,
    DieselRepository, LeadListQuery, LeadReader, LeadWriter, PlanReader, PlanWriter, QuoteReader,
    QuoteWriter, TeamReader,
};

mod common;

#[test]
fn test_lead_repository_crud() {
    let test_db = common::TestDb::new("test_lead_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let leads = vec![
        NewLead::new(
            1,
            "Alice".into(),
            Some("alice@example.com".into()),
            None,
            Some("Acme".into()),
        ),
        NewLead::new(1, "Bob".into(), Some("bob@example.com".into()), None, None),
    ];
    assert_eq!(repo.create_leads(&leads).unwrap(), 2);

    let (total, mut items) = repo.list_leads(LeadListQuery::new(1)).unwrap();
    assert_eq!(total, 2);
    items.sort_by(|a, b| a.name.cmp(&b.name));
    let alice = items[0].clone();
    let bob = items[1].clone();

    let (search_total, search_items) = repo
        .list_leads(LeadListQuery::new(1).search("Bob"))
        .unwrap();
    assert_eq!(search_total, 1);
    assert_eq!(search_items[0].name, "Bob");

    let updated = repo
        .update_lead(
            bob.id,
            1,
            &UpdateLead::new(
                "Bobby".into(),
                bob.email.clone(),
                None,
                None,
                LeadStatus::Qualified,
                false,
            ),
        )
        .unwrap();
    assert_eq!(updated.name, "Bobby");
    assert_eq!(updated.status, LeadStatus::Qualified);

    let (qualified_total, _) = repo
        .list_leads(LeadListQuery::new(1).status("qualified"))
        .unwrap();
    assert_eq!(qualified_total, 1);

    repo.delete_lead(alice.id, 1).unwrap();
    assert!(repo.get_lead_by_id(alice.id, 1).unwrap().is_none());
}

#[test]
fn test_lead_repository_scopes_by_hub() {
    let test_db = common::TestDb::new("test_lead_repository_scopes_by_hub.db");
    let repo = DieselRepository::new(test_db.pool());

    let lead = NewLead::new(1, "Alice".into(), None, None, None);
    repo.create_leads(&[lead]).unwrap();
    let (_, items) = repo.list_leads(LeadListQuery::new(1)).unwrap();

    assert!(repo.get_lead_by_id(items[0].id, 2).unwrap().is_none());
    let (other_hub_total, _) = repo.list_leads(LeadListQuery::new(2)).unwrap();
    assert_eq!(other_hub_total, 0);
}

#[test]
fn test_delete_lead_from_another_hub_leaves_everything_in_place() {
    let test_db = common::TestDb::new("test_delete_lead_foreign_hub.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_leads(&[NewLead::new(
        1,
        "Alice".into(),
        Some("alice@example.com".into()),
        None,
        None,
    )])
    .unwrap();
    let (_, items) = repo.list_leads(LeadListQuery::new(1)).unwrap();
    let lead_id = items[0].id;

    repo.log_activity(&NewActivityLog {
        hub_id: 1,
        lead_id: Some(lead_id),
        actor: "rep@example.com".into(),
        activity_type: ActivityType::Note,
        detail: serde_json::json!({"text": "called"}),
    })
    .unwrap();

    let err = repo.delete_lead(lead_id, 2).unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));

    // Lead and its activity trail both survive.
    assert!(repo.get_lead_by_id(lead_id, 1).unwrap().is_some());
    assert_eq!(repo.list_lead_activity(lead_id, 1).unwrap().len(), 1);
}

#[test]
fn test_delete_quote_from_another_hub_keeps_line_items() {
    let test_db = common::TestDb::new("test_delete_quote_foreign_hub.db");
    let repo = DieselRepository::new(test_db.pool());

    let quote = repo
        .create_quote(
            &NewQuote {
                hub_id: 1,
                opportunity_id: None,
                title: "Starter".into(),
                status: QuoteStatus::Draft,
            },
            &[NewQuoteItem {
                description: "Seat".into(),
                quantity: 2,
                unit_price_cents: 1000,
                discount_pct: 0.0,
                position: 0,
            }],
        )
        .unwrap();

    let err = repo.delete_quote(quote.id, 2).unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));

    let (_, items) = repo.get_quote_with_items(quote.id, 1).unwrap().unwrap();
    assert_eq!(items.len(), 1);
}

#[test]
fn test_delete_field_requires_matching_object() {
    let test_db = common::TestDb::new("test_delete_field_scoping.db");
    let repo = DieselRepository::new(test_db.pool());

    let invoice = repo
        .create_object(&NewCustomObject {
            hub_id: 1,
            name: "invoice".into(),
            label: "Invoice".into(),
        })
        .unwrap();
    let shipment = repo
        .create_object(&NewCustomObject {
            hub_id: 1,
            name: "shipment".into(),
            label: "Shipment".into(),
        })
        .unwrap();
    let field = repo
        .create_field(&NewCustomField {
            object_id: invoice.id,
            name: "due_date".into(),
            label: "Due date".into(),
            field_type: FieldType::Date,
            required: false,
            options: None,
            position: 0,
        })
        .unwrap();

    // Deleting through the wrong object must not touch the field.
    let err = repo.delete_field(field.id, shipment.id).unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
    assert_eq!(repo.list_fields(invoice.id).unwrap().len(), 1);

    repo.delete_field(field.id, invoice.id).unwrap();
    assert!(repo.list_fields(invoice.id).unwrap().is_empty());
}

#[test]
fn test_mark_lead_outreach_updates_status_fields() {
    let test_db = common::TestDb::new("test_mark_lead_outreach.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_leads(&[NewLead::new(
        1,
        "Alice".into(),
        Some("alice@example.com".into()),
        None,
        None,
    )])
    .unwrap();
    let (_, items) = repo.list_leads(LeadListQuery::new(1)).unwrap();

    let marked = repo
        .mark_lead_outreach(
            items[0].id,
            &OutreachUpdate {
                outreach_status: "sent".into(),
                outreach_token: "tok123".into(),
                last_contacted_at: Utc::now().naive_utc(),
            },
        )
        .unwrap();

    assert_eq!(marked.outreach_status.as_deref(), Some("sent"));
    assert_eq!(marked.outreach_token.as_deref(), Some("tok123"));
    assert!(marked.last_contacted_at.is_some());
}

#[test]
fn test_quote_repository_replaces_items_on_update() {
    let test_db = common::TestDb::new("test_quote_repository_items.db");
    let repo = DieselRepository::new(test_db.pool());

    let quote = repo
        .create_quote(
            &NewQuote {
                hub_id: 1,
                opportunity_id: None,
                title: "Starter".into(),
                status: QuoteStatus::Draft,
            },
            &[NewQuoteItem {
                description: "Seat".into(),
                quantity: 2,
                unit_price_cents: 1000,
                discount_pct: 0.0,
                position: 0,
            }],
        )
        .unwrap();

    let (_, items) = repo.get_quote_with_items(quote.id, 1).unwrap().unwrap();
    assert_eq!(items.len(), 1);

    let updated = repo
        .update_quote(
            quote.id,
            1,
            "Starter plus",
            QuoteStatus::Sent,
            &[
                NewQuoteItem {
                    description: "Seat".into(),
                    quantity: 3,
                    unit_price_cents: 1000,
                    discount_pct: 0.0,
                    position: 0,
                },
                NewQuoteItem {
                    description: "Support".into(),
                    quantity: 1,
                    unit_price_cents: 5000,
                    discount_pct: 10.0,
                    position: 1,
                },
            ],
        )
        .unwrap();
    assert_eq!(updated.title, "Starter plus");

    let (fetched, items) = repo.get_quote_with_items(quote.id, 1).unwrap().unwrap();
    assert_eq!(fetched.status, QuoteStatus::Sent);
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].description, "Support");
}

#[test]
fn test_plan_archive_leaves_teams_untouched() {
    let test_db = common::TestDb::new("test_plan_archive_leaves_teams.db");
    let repo = DieselRepository::new(test_db.pool());

    let plan = repo
        .create_plan(&NewPlan::new("Growth".into(), None, 4900))
        .unwrap();

    let team_id: i32 = {
        use orbit_crm::models::team::NewTeam;
        use orbit_crm::schema::teams;

        let mut conn = test_db.pool().get().unwrap();
        diesel::insert_into(teams::table)
            .values(&NewTeam {
                hub_id: 1,
                name: "Sales",
                plan_id: Some(plan.id),
            })
            .execute(&mut conn)
            .unwrap();
        teams::table
            .select(teams::id)
            .order(teams::id.desc())
            .first(&mut conn)
            .unwrap()
    };

    repo.archive_plan(plan.id).unwrap();

    // The plan disappears from the default listing but stays readable.
    assert!(repo.list_plans(false).unwrap().is_empty());
    let archived = repo.get_plan_by_id(plan.id).unwrap().unwrap();
    assert!(archived.archived);

    // The team still references the archived plan.
    let team = repo.get_team_by_id(team_id, 1).unwrap().unwrap();
    assert_eq!(team.plan_id, Some(plan.id));
}

#[test]
fn test_plan_update_and_listing_order() {
    let test_db = common::TestDb::new("test_plan_update_and_listing.db");
    let repo = DieselRepository::new(test_db.pool());

    let pro = repo
        .create_plan(&NewPlan::new("Pro".into(), Some("Everything".into()), 9900))
        .unwrap();
    repo.create_plan(&NewPlan::new("Starter".into(), None, 1900))
        .unwrap();

    let plans = repo.list_plans(false).unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].name, "Starter"); // cheapest first

    let updated = repo
        .update_plan(
            pro.id,
            &UpdatePlan {
                name: "Pro".into(),
                description: Some("Everything, annually".into()),
                monthly_price_cents: 8900,
            },
        )
        .unwrap();
    assert_eq!(updated.monthly_price_cents, 8900);
}

#[test]
fn test_cms_page_crud_and_published_filter() {
    let test_db = common::TestDb::new("test_cms_page_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let page = repo
        .create_page(&NewCmsPage {
            slug: "about-us".into(),
            title: "About".into(),
            body_html: "<p>Hello</p>".into(),
            published: false,
        })
        .unwrap();

    assert!(repo.list_pages(true).unwrap().is_empty());
    assert_eq!(repo.list_pages(false).unwrap().len(), 1);

    let fetched = repo.get_page_by_slug("about-us").unwrap().unwrap();
    assert_eq!(fetched.title, "About");

    repo.delete_page(page.id).unwrap();
    assert!(repo.get_page_by_slug("about-us").unwrap().is_none());
}
