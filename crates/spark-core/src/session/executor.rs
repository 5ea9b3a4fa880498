//! Mock execution backend
//!
//! Simulates the absent network round trip with a fixed-delay timer, then
//! fabricates the result list for the submitted mode. No retry, no error
//! path, no cancellation.

use std::time::Duration;

use tokio::time;
use tracing::debug;

use super::{Mode, RunResults, RunStatus, SearchHit, TaskRun};

/// Fabricate the fixed result list for a mode
pub fn fabricate(mode: Mode) -> RunResults {
    match mode {
        Mode::Search => RunResults::Search(vec![
            SearchHit {
                id: 1,
                title: "Search result 1",
                content: "This is a mock search result.",
            },
            SearchHit {
                id: 2,
                title: "Search result 2",
                content: "This is another mock search result.",
            },
        ]),
        Mode::Agent => RunResults::Agent(vec![TaskRun {
            id: 1,
            status: RunStatus::Complete,
            agent: "Email Agent",
            task: "Send email",
            result: "Email sent successfully.",
        }]),
    }
}

/// Mock backend standing in for search and agent execution
#[derive(Debug, Clone)]
pub struct MockBackend {
    delay: Duration,
}

impl MockBackend {
    /// Create a backend with the given simulated latency
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Simulated latency before results are fabricated
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run the query: sleep for the configured delay, then fabricate.
    ///
    /// The query text only drives logging; fabricated results are fixed per
    /// mode.
    pub async fn run(&self, mode: Mode, query: &str) -> RunResults {
        debug!(mode = mode.as_str(), query, "starting mock run");
        time::sleep(self.delay).await;
        let results = fabricate(mode);
        debug!(mode = mode.as_str(), items = results.len(), "mock run done");
        results
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fabricate_search_two_items() {
        let results = fabricate(Mode::Search);
        assert_eq!(results.mode(), Mode::Search);
        assert_eq!(results.len(), 2);

        let RunResults::Search(hits) = results else {
            panic!("expected search results");
        };
        assert_eq!(hits[0].title, "Search result 1");
        assert_eq!(hits[1].title, "Search result 2");
    }

    #[test]
    fn test_fabricate_agent_one_item() {
        let results = fabricate(Mode::Agent);
        assert_eq!(results.mode(), Mode::Agent);
        assert_eq!(results.len(), 1);

        let RunResults::Agent(runs) = results else {
            panic!("expected agent results");
        };
        assert_eq!(runs[0].status, RunStatus::Complete);
        assert_eq!(runs[0].agent, "Email Agent");
        assert_eq!(runs[0].result, "Email sent successfully.");
    }

    #[test]
    fn test_fabricated_ids_unique() {
        let RunResults::Search(hits) = fabricate(Mode::Search) else {
            panic!("expected search results");
        };
        let mut ids: Vec<u32> = hits.iter().map(|h| h.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), hits.len());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_waits_for_delay() {
        let backend = MockBackend::new(Duration::from_millis(1500));
        let started = time::Instant::now();

        let results = backend.run(Mode::Search, "weather").await;

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(results.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_with_zero_delay() {
        let backend = MockBackend::new(Duration::ZERO);
        let results = backend.run(Mode::Agent, "send an email").await;
        assert_eq!(results.len(), 1);
    }
}
