//! Post handlers - list, read, create and delete.

use actix_web::{HttpResponse, web};
use serde_json::Value;
use synthra_shared::ApiResponse;
use synthra_shared::dto::{Empty, PostListResponse, PostResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> HttpResponse {
    let posts = state.posts.list().await;
    HttpResponse::Ok().json(ApiResponse::ok(PostListResponse::from(posts)))
}

/// POST /api/posts - requires `title`, `content` and `excerpt`.
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(&body).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        PostResponse { post },
        "Post criado com sucesso!",
    )))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(&path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostResponse { post })))
}

/// DELETE /api/posts/{id} - unknown ids succeed too.
pub async fn delete_post(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    state.posts.delete(&path).await;
    HttpResponse::Ok().json(ApiResponse::ok_with_message(
        Empty::default(),
        "Post deletado com sucesso!",
    ))
}
