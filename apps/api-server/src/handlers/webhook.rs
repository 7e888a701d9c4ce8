//! Inbound automation webhook (Make.com scenarios posting AI output).

use actix_web::{HttpResponse, web};
use serde_json::Value;
use synthra_shared::ApiResponse;
use synthra_shared::dto::WebhookReceipt;

use crate::state::AppState;

/// POST /api/webhook/make
///
/// Accepts either a flat post object or a raw chat-completion response and
/// always stores a post.
pub async fn make_webhook(state: web::Data<AppState>, body: web::Json<Value>) -> HttpResponse {
    tracing::debug!(payload = %body.0, "Webhook received");

    let post = state.posts.ingest(&body).await;

    HttpResponse::Created().json(ApiResponse::ok_with_message(
        WebhookReceipt::from(&post),
        "Post criado via webhook!",
    ))
}
