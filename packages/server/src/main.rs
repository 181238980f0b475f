#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Binary entry point for the awaas directory API server.

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use awaas_catalog::CatalogStore;
use awaas_server::{AppState, handlers};
use awaas_storage::memory::{MemoryMessageStore, MemoryPostStore};
use std::sync::Arc;

/// Catalog seed used when `AWAAS_SEED` is not set.
const DEFAULT_SEED: u64 = 2024;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let seed: u64 = std::env::var("AWAAS_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);

    log::info!("Generating catalog (seed {seed})...");
    let catalog = Arc::new(CatalogStore::generate(seed));

    let admin_token = std::env::var("AWAAS_ADMIN_TOKEN").ok();
    if admin_token.is_none() {
        log::warn!("AWAAS_ADMIN_TOKEN not set; admin endpoints are disabled");
    }

    let state = web::Data::new(AppState {
        catalog,
        messages: Arc::new(MemoryMessageStore::new()),
        posts: Arc::new(MemoryPostStore::with_seed_posts()),
        admin_token,
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/states", web::get().to(handlers::states))
                    .route("/cities", web::get().to(handlers::cities))
                    .route("/areas", web::get().to(handlers::areas))
                    .route("/communities", web::get().to(handlers::communities))
                    .route(
                        "/communities/{id}",
                        web::get().to(handlers::community_detail),
                    )
                    .route("/contact", web::post().to(handlers::contact_submit))
                    .route("/admin/messages", web::get().to(handlers::admin_messages))
                    .route(
                        "/admin/messages/{id}/status",
                        web::put().to(handlers::admin_update_status),
                    )
                    .route(
                        "/admin/messages/{id}",
                        web::delete().to(handlers::admin_delete_message),
                    )
                    .route("/posts", web::get().to(handlers::posts)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
