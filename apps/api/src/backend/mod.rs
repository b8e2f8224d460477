//! Backend client, the single point of entry for all persistence calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to the platform backend
//! directly. All blog persistence MUST go through this module. This service
//! stores nothing itself; the job-board backend owns the data.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::blog::models::{BlogPostRecord, NewBlogPost};

const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Backend unavailable after {retries} retries")]
    Unavailable { retries: u32 },
}

/// The persistence seam. Implement this to swap the wire client without
/// touching any handler. Carried in `AppState` as `Arc<dyn BlogBackend>`.
#[async_trait]
pub trait BlogBackend: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<BlogPostRecord>, BackendError>;
    async fn get_post(&self, id: Uuid) -> Result<Option<BlogPostRecord>, BackendError>;
    async fn create_post(&self, post: &NewBlogPost) -> Result<BlogPostRecord, BackendError>;
    async fn update_post(
        &self,
        id: Uuid,
        post: &NewBlogPost,
    ) -> Result<BlogPostRecord, BackendError>;
}

/// REST client for the platform backend. Retries on 429 and 5xx with
/// exponential backoff, like every outbound client in this codebase.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Sends a request built by `build`, retrying transient failures.
    /// Non-transient error statuses are returned to the caller untouched.
    async fn send_with_retry(
        &self,
        build: impl Fn() -> reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, BackendError> {
        let mut last_error: Option<BackendError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 500ms, 1s
                let delay = Duration::from_millis(500 * (1 << (attempt - 1)));
                warn!(
                    "Backend call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match build().send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(BackendError::Http(e));
                    continue;
                }
            };

            let status = response.status();
            if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Backend returned {}: {}", status, body);
                last_error = Some(BackendError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            return Ok(response);
        }

        Err(last_error.unwrap_or(BackendError::Unavailable {
            retries: MAX_RETRIES,
        }))
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl BlogBackend for HttpBackend {
    async fn list_posts(&self) -> Result<Vec<BlogPostRecord>, BackendError> {
        let response = self
            .send_with_retry(|| self.client.get(self.url("/blogs")))
            .await?;
        let posts: Vec<BlogPostRecord> = Self::decode(response).await?;
        debug!("Backend returned {} posts", posts.len());
        Ok(posts)
    }

    async fn get_post(&self, id: Uuid) -> Result<Option<BlogPostRecord>, BackendError> {
        let response = self
            .send_with_retry(|| self.client.get(self.url(&format!("/blogs/{id}"))))
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::decode(response).await?))
    }

    async fn create_post(&self, post: &NewBlogPost) -> Result<BlogPostRecord, BackendError> {
        let response = self
            .send_with_retry(|| self.client.post(self.url("/blogs")).json(post))
            .await?;
        Self::decode(response).await
    }

    async fn update_post(
        &self,
        id: Uuid,
        post: &NewBlogPost,
    ) -> Result<BlogPostRecord, BackendError> {
        let response = self
            .send_with_retry(|| self.client.put(self.url(&format!("/blogs/{id}"))).json(post))
            .await?;
        Self::decode(response).await
    }
}

/// Joins a base URL and a path without doubling or dropping the slash.
fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_strips_trailing_slash() {
        assert_eq!(
            join_url("http://backend:9000/api/", "/blogs"),
            "http://backend:9000/api/blogs"
        );
    }

    #[test]
    fn test_join_url_without_trailing_slash() {
        assert_eq!(
            join_url("http://backend:9000/api", "/blogs"),
            "http://backend:9000/api/blogs"
        );
    }
}
