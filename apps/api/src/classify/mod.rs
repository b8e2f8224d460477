// Topic classification: the fixed keyword table, scoring, selection policy,
// and the debounce helper for interactive callers. Every consumer (blog
// create, edit, list rendering) goes through this one module.

pub mod classifier;
pub mod debounce;
pub mod handlers;
pub mod scoring;
pub mod topics;
