#![allow(dead_code)]

//! Debounced classification for interactive callers.
//!
//! An editor that classifies on every keystroke would recompute constantly
//! and flicker the topic badge. The debouncer coalesces rapid triggers into
//! one classification after a quiet period. The pending timer is aborted on
//! re-trigger, on explicit cancel, and on drop, so a callback never fires
//! against torn-down caller state.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;

use crate::classify::classifier::classify;
use crate::classify::topics::Topic;

/// Quiet period before a pending classification runs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

pub struct ClassifyDebouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl ClassifyDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules a classification of `(title, content)` after the quiet
    /// period, cancelling any classification still pending. `on_result` runs
    /// only if no re-trigger or cancellation happens first.
    pub fn trigger<F>(&mut self, title: String, content: String, on_result: F)
    where
        F: FnOnce(Topic) + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            on_result(classify(&title, &content));
        }));
    }

    /// Aborts the pending classification, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// True while a triggered classification has not yet run or been
    /// cancelled.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ClassifyDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
