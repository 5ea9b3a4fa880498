//! Query suggestions
//!
//! Keyword-triggered suggestion lists for the home search bar, and the
//! debounce helper the UI uses to avoid recomputing on every keystroke.

use std::time::{Duration, Instant};

/// Suggestions shown when the query mentions booking something
pub const BOOK_SUGGESTIONS: &[&str] = &[
    "Book a flight to NYC",
    "Book a hotel in Paris",
    "Book a restaurant for dinner",
];

/// Suggestions shown when the query mentions finding something
pub const FIND_SUGGESTIONS: &[&str] = &[
    "Find best restaurants near me",
    "Find AI news articles",
    "Find my recent documents",
];

/// Suggestions shown when the query mentions email
pub const EMAIL_SUGGESTIONS: &[&str] = &[
    "Email the quarterly report to my manager",
    "Email my team a status update",
    "Check my unread emails",
];

/// Suggestion list for the given query.
///
/// Queries of two characters or fewer never produce suggestions. Longer
/// queries are matched against a few hard-coded keywords, first match wins:
/// "book", then "find", then "email".
pub fn suggestions(query: &str) -> &'static [&'static str] {
    if query.len() <= 2 {
        return &[];
    }
    let lower = query.to_lowercase();
    if lower.contains("book") {
        BOOK_SUGGESTIONS
    } else if lower.contains("find") {
        FIND_SUGGESTIONS
    } else if lower.contains("email") {
        EMAIL_SUGGESTIONS
    } else {
        &[]
    }
}

/// Fixed-delay debounce for suggestion recomputation.
///
/// Each edit re-arms the deadline; the UI polls `fire` on its tick and
/// recomputes suggestions only once input has been quiet for the window.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet window
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Record an edit at `now`, pushing the deadline out
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Returns true once per armed deadline, after the window has elapsed
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any armed deadline
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is armed
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}
