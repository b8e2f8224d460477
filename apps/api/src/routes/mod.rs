pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::blog::handlers as blog;
use crate::classify::handlers as classify;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Classification API
        .route("/api/v1/topics", get(classify::handle_list_topics))
        .route("/api/v1/classify", post(classify::handle_classify))
        // Blog API
        .route(
            "/api/v1/blogs",
            get(blog::handle_list_blogs).post(blog::handle_create_blog),
        )
        .route(
            "/api/v1/blogs/:id",
            get(blog::handle_get_blog).put(blog::handle_update_blog),
        )
        .with_state(state)
}
