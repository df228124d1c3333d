use std::sync::Arc;

#[macro_use]
extern crate lazy_static;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::posts::service::PostService;

pub mod app;
pub mod posts;

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub post_service: Arc<PostService>,
}

impl AppState {
    pub fn new(post_service: PostService) -> Self {
        Self {
            post_service: Arc::new(post_service),
        }
    }
}

/// Routes of the api. CORS and rate limiting are layered on by the binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(app::controller::get_root))
        // posts
        .route(
            "/posts",
            get(posts::controller::get_posts).post(posts::controller::create_post),
        )
        .route(
            "/posts/:id",
            get(posts::controller::get_post_by_id)
                .patch(posts::controller::edit_post_by_id)
                .delete(posts::controller::delete_post_by_id),
        )
        // layers
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
