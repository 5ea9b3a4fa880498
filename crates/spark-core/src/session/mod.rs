//! Home-page session state
//!
//! Owns the search/agent mode toggle, the query text, and the
//! idle/loading/done state machine driven by the mock executor.

pub mod executor;

pub use executor::MockBackend;

use serde::{Deserialize, Serialize};

/// Search bar mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Generic information retrieval
    #[default]
    Search,
    /// Agent task execution
    Agent,
}

impl Mode {
    /// Convert to the display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Search => "search",
            Mode::Agent => "agent",
        }
    }

    /// Parse from a display string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "search" => Some(Mode::Search),
            "agent" => Some(Mode::Agent),
            _ => None,
        }
    }

    /// The other mode
    pub fn toggled(&self) -> Self {
        match self {
            Mode::Search => Mode::Agent,
            Mode::Agent => Mode::Search,
        }
    }

    /// Input placeholder for this mode
    pub fn placeholder(&self) -> &'static str {
        match self {
            Mode::Search => "Search anything...",
            Mode::Agent => "Describe your task...",
        }
    }
}

/// One fabricated search result
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: u32,
    pub title: &'static str,
    pub content: &'static str,
}

/// Outcome of a mock task run. The mock cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    #[default]
    Complete,
}

impl RunStatus {
    /// Convert to the display string
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Complete => "complete",
        }
    }
}

/// One fabricated agent-task result
#[derive(Debug, Clone, Serialize)]
pub struct TaskRun {
    pub id: u32,
    pub status: RunStatus,
    pub agent: &'static str,
    pub task: &'static str,
    pub result: &'static str,
}

/// Results delivered by a finished mock run
#[derive(Debug, Clone, Serialize)]
pub enum RunResults {
    /// Search mode: a fixed two-item result list
    Search(Vec<SearchHit>),
    /// Agent mode: a fixed one-item task list
    Agent(Vec<TaskRun>),
}

impl RunResults {
    /// Mode this result set belongs to
    pub fn mode(&self) -> Mode {
        match self {
            RunResults::Search(_) => Mode::Search,
            RunResults::Agent(_) => Mode::Agent,
        }
    }

    /// Number of items in the result list
    pub fn len(&self) -> usize {
        match self {
            RunResults::Search(hits) => hits.len(),
            RunResults::Agent(runs) => runs.len(),
        }
    }

    /// Whether the result list is empty (the mock never fabricates one)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Session phase
#[derive(Debug, Clone, Default)]
pub enum Phase {
    /// Nothing submitted yet, or cleared
    #[default]
    Idle,
    /// A mock run is in flight
    Loading,
    /// The last run to finish
    Done(RunResults),
}

/// Home-page session: mode, query, and run state.
///
/// There is no cancellation of an in-flight run. Submitting again while
/// loading simply starts another timer; whichever completion arrives last
/// overwrites the phase.
#[derive(Debug, Default)]
pub struct Session {
    mode: Mode,
    query: String,
    phase: Phase,
}

impl Session {
    /// Create an idle session in the default mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch mode. The query text is kept.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Flip between search and agent mode. The query text is kept.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Current query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query text
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Current phase
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Whether a run is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// Results of the last finished run, if any
    pub fn results(&self) -> Option<&RunResults> {
        match &self.phase {
            Phase::Done(results) => Some(results),
            _ => None,
        }
    }

    /// Submit the current query.
    ///
    /// An empty or whitespace-only query is a no-op and returns false.
    /// Otherwise the session enters `Loading` and the caller is expected to
    /// start a mock run that eventually calls [`Session::finish`].
    pub fn submit(&mut self) -> bool {
        if self.query.trim().is_empty() {
            return false;
        }
        self.phase = Phase::Loading;
        true
    }

    /// Deliver results from a finished run. Last completion wins.
    pub fn finish(&mut self, results: RunResults) {
        self.phase = Phase::Done(results);
    }

    /// Return to idle, keeping mode and query
    pub fn clear(&mut self) {
        self.phase = Phase::Idle;
    }
}

/// A quick-action shortcut on the home page
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuickTask {
    pub icon: &'static str,
    pub label: &'static str,
    pub task: &'static str,
}

/// Quick-action shortcuts shown while the session is idle.
///
/// Selecting one sets the query to its task text, forces agent mode, and
/// submits.
pub const QUICK_TASKS: &[QuickTask] = &[
    QuickTask {
        icon: "✉️",
        label: "Email",
        task: "Send an email",
    },
    QuickTask {
        icon: "📅",
        label: "Calendar",
        task: "Schedule a meeting",
    },
    QuickTask {
        icon: "📄",
        label: "Documents",
        task: "Summarize document",
    },
    QuickTask {
        icon: "✈️",
        label: "Travel",
        task: "Book a flight",
    },
    QuickTask {
        icon: "🛒",
        label: "Shopping",
        task: "Find products",
    },
    QuickTask {
        icon: "🌐",
        label: "Translate",
        task: "Translate text",
    },
    QuickTask {
        icon: "⏰",
        label: "Reminders",
        task: "Set a reminder",
    },
    QuickTask {
        icon: "💾",
        label: "Files",
        task: "Manage files",
    },
];
