use actix_web::{App, test, web};
use serde_json::Value;

use orbit_crm::domain::plan::NewPlan;
use orbit_crm::models::config::{AiConfig, OutreachConfig, ServerConfig};
use orbit_crm::repository::{DieselRepository, PlanWriter};
use orbit_crm::routes::plans::list_plans;
use orbit_crm::{SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

mod common;

const SECRET: &str = "test-secret";

fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        database_url: ":memory:".to_string(),
        templates_dir: "templates/**/*".to_string(),
        storage_dir: "/tmp".to_string(),
        secret: SECRET.to_string(),
        outreach: OutreachConfig {
            from_email: "crm@example.com".to_string(),
            from_name: "Orbit CRM".to_string(),
            ses_endpoint: None,
            ses_token: None,
            gmail_token: None,
            smtp_relay_url: None,
            smtp_relay_token: None,
            sms_gateway_url: None,
            sms_gateway_token: None,
        },
        ai: AiConfig {
            api_base: "http://localhost:1".to_string(),
            api_key: "unused".to_string(),
            model: "test".to_string(),
        },
    }
}

#[actix_web::test]
async fn test_missing_token_yields_error_envelope() {
    let test_db = common::TestDb::new("test_missing_token_envelope.db");
    let repo = DieselRepository::new(test_db.pool());

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .app_data(web::Data::new(server_config()))
            .service(list_plans),
    )
    .await;

    let req = test::TestRequest::get().uri("/plans").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "unauthorized");
    assert!(body["error"]["message"].is_string());
}

#[actix_web::test]
async fn test_missing_role_is_forbidden() {
    let test_db = common::TestDb::new("test_missing_role_forbidden.db");
    let repo = DieselRepository::new(test_db.pool());

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .app_data(web::Data::new(server_config()))
            .service(list_plans),
    )
    .await;

    let token = common::auth_token(1, &["billing"], SECRET);
    let req = test::TestRequest::get()
        .uri("/plans")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "forbidden");
}

#[actix_web::test]
async fn test_plans_listing_with_valid_token() {
    let test_db = common::TestDb::new("test_plans_listing_valid_token.db");
    let repo = DieselRepository::new(test_db.pool());
    repo.create_plan(&NewPlan::new("Starter".into(), None, 1900))
        .unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .app_data(web::Data::new(server_config()))
            .service(list_plans),
    )
    .await;

    let token = common::auth_token(1, &[SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE], SECRET);
    let req = test::TestRequest::get()
        .uri("/plans")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(|plans| plans.len()), Some(1));
    assert_eq!(body[0]["name"], "Starter");
}
