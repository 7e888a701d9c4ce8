//! HTTP handlers and route configuration.

mod health;
mod posts;
mod webhook;


use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Largest accepted JSON body; generated articles can be long.
const JSON_BODY_LIMIT: usize = 1024 * 1024;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_BODY_LIMIT)
            .error_handler(json_error_handler),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::delete().to(posts::delete_post)),
            )
            .route("/webhook/make", web::post().to(webhook::make_webhook)),
    );
}
