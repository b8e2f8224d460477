//! Axum route handlers for the Blog API.
//!
//! These are the three consumers of the shared topic classifier: create,
//! edit, and list/detail rendering. The classifier is advisory everywhere.
//! An explicit category from the author always wins, and inferred topics on
//! the read path are never written back.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::blog::models::{BlogPostRecord, NewBlogPost};
use crate::classify::classifier::classify;
use crate::classify::topics::Topic;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    /// Explicit author identity. Identity is always a request input here,
    /// never ambient state captured at startup.
    pub author_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Manual category override. When absent the classifier fills it in.
    pub category: Option<Topic>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBlogRequest {
    pub author_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Manual category override. When absent the updated text is
    /// re-classified.
    pub category: Option<Topic>,
}

#[derive(Debug, Serialize)]
pub struct BlogPostResponse {
    pub post: BlogPostRecord,
    /// The stored category, or the classifier's inference when none is
    /// stored.
    pub topic: Topic,
    pub topic_label: &'static str,
    pub topic_inferred: bool,
}

#[derive(Debug, Serialize)]
pub struct BlogListResponse {
    pub posts: Vec<BlogPostResponse>,
    pub total: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/blogs
///
/// Creates a post. Without an explicit category the post is classified from
/// its title and content before being sent to the backend.
pub async fn handle_create_blog(
    State(state): State<AppState>,
    Json(request): Json<CreateBlogRequest>,
) -> Result<Json<BlogPostResponse>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let category = request
        .category
        .unwrap_or_else(|| classify(&request.title, &request.content));

    let post = state
        .backend
        .create_post(&NewBlogPost {
            author_id: request.author_id,
            title: request.title,
            content: request.content,
            category,
        })
        .await?;

    Ok(Json(present(post)))
}

/// PUT /api/v1/blogs/:id
///
/// Updates a post. Same category rule as create: an explicit choice wins,
/// otherwise the updated text is re-classified.
pub async fn handle_update_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBlogRequest>,
) -> Result<Json<BlogPostResponse>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    state
        .backend
        .get_post(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Blog post {id} not found")))?;

    let category = request
        .category
        .unwrap_or_else(|| classify(&request.title, &request.content));

    let post = state
        .backend
        .update_post(
            id,
            &NewBlogPost {
                author_id: request.author_id,
                title: request.title,
                content: request.content,
                category,
            },
        )
        .await?;

    Ok(Json(present(post)))
}

/// GET /api/v1/blogs
///
/// Lists posts for the grid. Posts with no stored category get an inferred
/// topic so the grid can still render a badge.
pub async fn handle_list_blogs(
    State(state): State<AppState>,
) -> Result<Json<BlogListResponse>, AppError> {
    let posts = state.backend.list_posts().await?;
    let total = posts.len();
    Ok(Json(BlogListResponse {
        posts: posts.into_iter().map(present).collect(),
        total,
    }))
}

/// GET /api/v1/blogs/:id
pub async fn handle_get_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogPostResponse>, AppError> {
    let post = state
        .backend
        .get_post(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Blog post {id} not found")))?;
    Ok(Json(present(post)))
}

/// Resolves the display topic for a post: stored category first, classifier
/// inference for legacy posts without one.
fn present(post: BlogPostRecord) -> BlogPostResponse {
    let (topic, topic_inferred) = match post.category {
        Some(category) => (category, false),
        None => (classify(&post.title, &post.content), true),
    };
    BlogPostResponse {
        topic,
        topic_label: topic.label(),
        topic_inferred,
        post,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendError, BlogBackend};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    /// Stand-in for the platform backend so handler logic is testable
    /// without the wire.
    #[derive(Default)]
    struct InMemoryBackend {
        posts: Mutex<Vec<BlogPostRecord>>,
    }

    impl InMemoryBackend {
        fn seed(&self, post: BlogPostRecord) {
            self.posts.lock().unwrap().push(post);
        }
    }

    #[async_trait]
    impl BlogBackend for InMemoryBackend {
        async fn list_posts(&self) -> Result<Vec<BlogPostRecord>, BackendError> {
            Ok(self.posts.lock().unwrap().clone())
        }

        async fn get_post(&self, id: Uuid) -> Result<Option<BlogPostRecord>, BackendError> {
            Ok(self
                .posts
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned())
        }

        async fn create_post(&self, post: &NewBlogPost) -> Result<BlogPostRecord, BackendError> {
            let now = Utc::now();
            let record = BlogPostRecord {
                id: Uuid::new_v4(),
                author_id: post.author_id,
                title: post.title.clone(),
                content: post.content.clone(),
                category: Some(post.category),
                created_at: now,
                updated_at: now,
            };
            self.posts.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn update_post(
            &self,
            id: Uuid,
            post: &NewBlogPost,
        ) -> Result<BlogPostRecord, BackendError> {
            let mut posts = self.posts.lock().unwrap();
            let existing = posts.iter_mut().find(|p| p.id == id).ok_or_else(|| {
                BackendError::Api {
                    status: 404,
                    message: format!("post {id} not found"),
                }
            })?;
            existing.author_id = post.author_id;
            existing.title = post.title.clone();
            existing.content = post.content.clone();
            existing.category = Some(post.category);
            existing.updated_at = Utc::now();
            Ok(existing.clone())
        }
    }

    fn test_state() -> (Arc<InMemoryBackend>, AppState) {
        let backend = Arc::new(InMemoryBackend::default());
        let state = AppState {
            backend: backend.clone(),
        };
        (backend, state)
    }

    fn create_request(title: &str, content: &str, category: Option<Topic>) -> CreateBlogRequest {
        CreateBlogRequest {
            author_id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            category,
        }
    }

    #[tokio::test]
    async fn test_create_without_category_classifies() {
        let (_, state) = test_state();
        let Json(body) = handle_create_blog(
            State(state),
            Json(create_request(
                "Hướng dẫn lập trình Python cơ bản",
                "Bài viết về lập trình và thuật toán",
                None,
            )),
        )
        .await
        .unwrap();

        assert_eq!(body.topic, Topic::Programming);
        assert_eq!(body.post.category, Some(Topic::Programming));
        assert!(!body.topic_inferred, "classified category is stored, not inferred");
    }

    #[tokio::test]
    async fn test_create_with_explicit_category_keeps_it() {
        let (_, state) = test_state();
        // Text that classifies as programming, but the author says security.
        let Json(body) = handle_create_blog(
            State(state),
            Json(create_request(
                "Hướng dẫn lập trình Python cơ bản",
                "Bài viết về lập trình và thuật toán",
                Some(Topic::Security),
            )),
        )
        .await
        .unwrap();

        assert_eq!(body.post.category, Some(Topic::Security));
        assert_eq!(body.topic, Topic::Security);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title() {
        let (_, state) = test_state();
        let err = handle_create_blog(State(state), Json(create_request("   ", "content", None)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_without_category_reclassifies() {
        let (_, state) = test_state();
        let Json(created) = handle_create_blog(
            State(state.clone()),
            Json(create_request("Hướng dẫn lập trình Python cơ bản", "", None)),
        )
        .await
        .unwrap();
        assert_eq!(created.topic, Topic::Programming);

        let Json(updated) = handle_update_blog(
            State(state),
            Path(created.post.id),
            Json(UpdateBlogRequest {
                author_id: created.post.author_id,
                title: "Bảo mật web cơ bản".to_string(),
                content: "Tìm hiểu lỗ hổng và mã hóa".to_string(),
                category: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(updated.topic, Topic::Security);
        assert_eq!(updated.post.category, Some(Topic::Security));
    }

    #[tokio::test]
    async fn test_update_unknown_post_is_not_found() {
        let (_, state) = test_state();
        let err = handle_update_blog(
            State(state),
            Path(Uuid::new_v4()),
            Json(UpdateBlogRequest {
                author_id: Uuid::new_v4(),
                title: "title".to_string(),
                content: String::new(),
                category: None,
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_infers_topic_for_uncategorized_posts() {
        let (backend, state) = test_state();
        let now = Utc::now();
        backend.seed(BlogPostRecord {
            id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            title: "Xây dựng ứng dụng với React và NextJS".to_string(),
            content: "Hướng dẫn sử dụng React, HTML, CSS để làm frontend".to_string(),
            category: None,
            created_at: now,
            updated_at: now,
        });

        let Json(body) = handle_list_blogs(State(state)).await.unwrap();

        assert_eq!(body.total, 1);
        assert_eq!(body.posts[0].topic, Topic::Web);
        assert!(body.posts[0].topic_inferred);
        // The inference is display-only; the stored record is untouched.
        assert_eq!(body.posts[0].post.category, None);
    }

    #[tokio::test]
    async fn test_get_returns_stored_category_uninferred() {
        let (_, state) = test_state();
        let Json(created) = handle_create_blog(
            State(state.clone()),
            Json(create_request(
                "Triển khai ứng dụng lên AWS",
                "Hướng dẫn Docker và Kubernetes cơ bản",
                None,
            )),
        )
        .await
        .unwrap();

        let Json(fetched) = handle_get_blog(State(state), Path(created.post.id))
            .await
            .unwrap();
        assert_eq!(fetched.topic, Topic::Cloud);
        assert!(!fetched.topic_inferred);
    }
}
