use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::ai::TextGenerator;
use crate::ai::openai::OpenAiGenerator;
use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::accounts::{
    add_contact, create_account, delete_account, delete_contact, get_account, list_accounts,
    update_account,
};
use crate::routes::ai::{chat, chat_history, enhance_email};
use crate::routes::boards::{
    add_board_member, available_board_members, create_board, get_board, list_boards,
    remove_board_member,
};
use crate::routes::cms::{
    create_page, delete_page, get_page, list_all_pages, list_pages, og_image, update_page,
};
use crate::routes::documents::{list_documents, upload_document};
use crate::routes::leads::{
    create_lead, delete_lead, get_lead, import_leads, lead_activity, list_leads, update_lead,
};
use crate::routes::messages::{list_messages, send_message};
use crate::routes::opportunities::{
    create_opportunity, delete_opportunity, get_opportunity, list_opportunities,
    update_opportunity,
};
use crate::routes::outreach::{preview_email, preview_sms, send_email_batch, send_sms_batch};
use crate::routes::plans::{create_plan, delete_plan, list_plans, update_plan};
use crate::routes::quotes::{
    create_quote, delete_quote, get_quote, list_quotes, quote_invoice, update_quote,
};
use crate::routes::schema_builder::{
    create_field, create_layout, create_object, delete_field, delete_layout, delete_object,
    get_object, list_objects, update_object,
};
use crate::routes::teams::{get_team, list_teams, save_ai_config, save_portal};
use crate::routes::theme::convert_color;
use crate::transport::OutreachTransports;

pub mod ai;
pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
pub mod transport;

pub const SERVICE_ACCESS_ROLE: &str = "crm";
pub const SERVICE_ADMIN_ROLE: &str = "crm_admin";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let transports = web::Data::new(OutreachTransports::from_config(&server_config.outreach));

    let generator: Arc<dyn TextGenerator> = Arc::new(OpenAiGenerator::new(&server_config.ai));
    let generator = web::Data::from(generator);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(list_leads)
                    .service(get_lead)
                    .service(create_lead)
                    .service(update_lead)
                    .service(delete_lead)
                    .service(import_leads)
                    .service(lead_activity)
                    .service(list_accounts)
                    .service(get_account)
                    .service(create_account)
                    .service(update_account)
                    .service(delete_account)
                    .service(add_contact)
                    .service(delete_contact)
                    .service(list_opportunities)
                    .service(get_opportunity)
                    .service(create_opportunity)
                    .service(update_opportunity)
                    .service(delete_opportunity)
                    .service(list_quotes)
                    .service(get_quote)
                    .service(create_quote)
                    .service(update_quote)
                    .service(delete_quote)
                    .service(quote_invoice)
                    .service(list_boards)
                    .service(get_board)
                    .service(create_board)
                    .service(add_board_member)
                    .service(remove_board_member)
                    .service(available_board_members)
                    .service(list_documents)
                    .service(upload_document)
                    .service(list_messages)
                    .service(send_message)
                    .service(preview_email)
                    .service(preview_sms)
                    .service(send_email_batch)
                    .service(send_sms_batch)
                    .service(enhance_email)
                    .service(chat_history)
                    .service(chat)
                    .service(list_teams)
                    .service(get_team)
                    .service(save_ai_config)
                    .service(save_portal)
                    .service(list_plans)
                    .service(create_plan)
                    .service(update_plan)
                    .service(delete_plan)
                    .service(list_objects)
                    .service(get_object)
                    .service(create_object)
                    .service(update_object)
                    .service(delete_object)
                    .service(create_field)
                    .service(delete_field)
                    .service(create_layout)
                    .service(delete_layout)
                    .service(list_pages)
                    .service(get_page)
                    .service(list_all_pages)
                    .service(create_page)
                    .service(update_page)
                    .service(delete_page)
                    .service(og_image)
                    .service(convert_color),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .app_data(transports.clone())
            .app_data(generator.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
