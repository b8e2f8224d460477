//! Axum route handlers for the classification API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::classify::classifier::{rank_topics, select_topic, TopicScore};
use crate::classify::scoring::{ScoringWeights, SelectionPolicy};
use crate::classify::topics::Topic;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub topic: Topic,
    pub label: &'static str,
    /// Full ranking, score descending. Advisory detail for the UI; the
    /// author can always override the suggested topic.
    pub scores: Vec<TopicScore>,
}

#[derive(Debug, Serialize)]
pub struct TopicSummary {
    pub id: &'static str,
    pub label: &'static str,
}

/// POST /api/v1/classify
///
/// Classification is total over string inputs, so there is nothing to
/// validate: empty input yields the default topic.
pub async fn handle_classify(Json(request): Json<ClassifyRequest>) -> Json<ClassifyResponse> {
    let weights = ScoringWeights::default();
    let policy = SelectionPolicy::default();

    let scores = rank_topics(&request.title, &request.content, &weights, &policy);
    let topic = select_topic(&scores, &policy);

    Json(ClassifyResponse {
        topic,
        label: topic.label(),
        scores,
    })
}

/// GET /api/v1/topics
///
/// The fixed topic set, for category pickers.
pub async fn handle_list_topics() -> Json<Vec<TopicSummary>> {
    Json(
        Topic::ALL
            .iter()
            .map(|t| TopicSummary {
                id: t.id(),
                label: t.label(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_classify_endpoint_returns_winner_and_full_ranking() {
        let response = handle_classify(Json(ClassifyRequest {
            title: "Hướng dẫn lập trình Python cơ bản".to_string(),
            content: "Bài viết về lập trình và thuật toán".to_string(),
        }))
        .await;

        assert_eq!(response.topic, Topic::Programming);
        assert_eq!(response.label, Topic::Programming.label());
        assert_eq!(response.scores.len(), Topic::ALL.len());
        assert_eq!(response.scores[0].topic, Topic::Programming);
    }

    #[tokio::test]
    async fn test_classify_endpoint_is_total_on_empty_input() {
        let response = handle_classify(Json(ClassifyRequest {
            title: String::new(),
            content: String::new(),
        }))
        .await;

        assert_eq!(response.topic, Topic::Programming);
    }

    #[tokio::test]
    async fn test_topics_endpoint_lists_all_six() {
        let response = handle_list_topics().await;
        assert_eq!(response.len(), 6);
        assert_eq!(response[0].id, "programming");
    }
}
