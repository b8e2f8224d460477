//! Topic classifier. Scores keyword evidence in a post's title and content
//! against the fixed topic table and picks the winning topic.
//!
//! Pure, total, deterministic. Never fails: with zero keyword evidence the
//! first configured topic (`programming`) is returned. The source app
//! duplicated this logic across its create, edit, and list screens with
//! drifting weights; this module is the single shared implementation.

use std::cmp::Ordering;

use serde::Serialize;

use crate::classify::scoring::{ScoringWeights, SelectionPolicy};
use crate::classify::topics::{KeywordSet, Topic};

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// One topic's computed evidence. Returned in ranked order for transparency
/// so callers can show why a topic was chosen.
#[derive(Debug, Clone, Serialize)]
pub struct TopicScore {
    pub topic: Topic,
    pub score: f64,
    /// Distinct keywords (all tiers) matched anywhere in title + content.
    pub distinct_matches: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Public contract
// ────────────────────────────────────────────────────────────────────────────

/// Classifies a post with the default weights and policy.
pub fn classify(title: &str, content: &str) -> Topic {
    classify_with(
        title,
        content,
        &ScoringWeights::default(),
        &SelectionPolicy::default(),
    )
}

/// Classifies a post with explicit weights and policy.
pub fn classify_with(
    title: &str,
    content: &str,
    weights: &ScoringWeights,
    policy: &SelectionPolicy,
) -> Topic {
    select_topic(&rank_topics(title, content, weights, policy), policy)
}

/// Scores every topic and returns them sorted by score descending. The sort
/// is stable, so equal scores keep the configured topic order.
pub fn rank_topics(
    title: &str,
    content: &str,
    weights: &ScoringWeights,
    policy: &SelectionPolicy,
) -> Vec<TopicScore> {
    let title = title.to_lowercase();
    let content = content.to_lowercase();
    let combined = format!("{title} {content}");

    let mut ranked: Vec<TopicScore> = Topic::ALL
        .iter()
        .map(|&topic| score_topic(topic, &title, &content, &combined, weights, policy))
        .collect();

    // Scores are finite sums of finite weights, so partial_cmp cannot fail.
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}

/// Applies the selection policy to a ranking produced by [`rank_topics`].
///
/// In order: no evidence at all falls back to the default topic; a leader
/// ahead by the dominance ratio (inclusive) wins outright; otherwise, if
/// `ai` is among the top two and the gap is within the closeness threshold,
/// ambiguous AI-adjacent content resolves to `ai`; otherwise the leader.
pub fn select_topic(ranked: &[TopicScore], policy: &SelectionPolicy) -> Topic {
    // Topic::ALL has six entries, so a ranking always has a top two.
    let top1 = &ranked[0];
    let top2 = &ranked[1];

    if top1.score == 0.0 {
        return Topic::default();
    }
    if top1.score >= top2.score * policy.dominance_ratio {
        return top1.topic;
    }
    if (top1.topic == Topic::Ai || top2.topic == Topic::Ai)
        && top1.score - top2.score <= policy.ai_closeness
    {
        return Topic::Ai;
    }
    top1.topic
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring internals
// ────────────────────────────────────────────────────────────────────────────

fn score_topic(
    topic: Topic,
    title: &str,
    content: &str,
    combined: &str,
    weights: &ScoringWeights,
    policy: &SelectionPolicy,
) -> TopicScore {
    let ks = topic.keywords();

    let title_score = matches_in(title, ks.primary) * weights.title_primary
        + matches_in(title, ks.secondary) * weights.title_secondary
        + matches_in(title, ks.frameworks) * weights.title_frameworks;

    let content_score = matches_in(content, ks.primary) * weights.content_primary
        + matches_in(content, ks.secondary) * weights.content_secondary
        + matches_in(content, ks.frameworks) * weights.content_frameworks;

    let distinct_matches = distinct_matches(combined, ks);

    let mut score = title_score + content_score;
    if distinct_matches > policy.diversity_threshold {
        score *= policy.diversity_bonus;
    }

    TopicScore {
        topic,
        score,
        distinct_matches,
    }
}

/// Counts how many keywords from the tier occur in the haystack. Presence
/// only: a keyword counts once per location no matter how often it repeats.
/// Matching is substring containment, not word-boundary tokenization.
fn matches_in(haystack: &str, keywords: &[&str]) -> f64 {
    keywords.iter().filter(|kw| haystack.contains(*kw)).count() as f64
}

fn distinct_matches(combined: &str, ks: &KeywordSet) -> usize {
    ks.primary
        .iter()
        .chain(ks.secondary)
        .chain(ks.frameworks)
        .filter(|kw| combined.contains(*kw))
        .count()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
