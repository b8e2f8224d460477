use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classify::topics::Topic;

/// A blog post as stored by the platform backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostRecord {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    /// None for posts whose author never picked a category. Display paths
    /// infer a topic for those on the fly; the inference is not persisted.
    pub category: Option<Topic>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload sent to the backend on create and update. The category is always
/// resolved by then: the author's explicit choice, or the classifier's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBlogPost {
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub category: Topic,
}
