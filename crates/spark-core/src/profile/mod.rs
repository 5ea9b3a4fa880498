//! User profile
//!
//! Static mock user info and task history, plus the transient settings
//! toggles shown on the profile page.

use chrono::NaiveDate;
use serde::Serialize;

use crate::session::Mode;

/// One entry in the mock task history
#[derive(Debug, Clone, Serialize)]
pub struct TaskRecord {
    pub id: u32,
    pub query: &'static str,
    pub date: NaiveDate,
    pub completed: bool,
}

impl TaskRecord {
    /// Badge text for this record
    pub fn badge(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "In Progress"
        }
    }
}

/// The mock user shown on the profile page
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub avatar: &'static str,
    pub plan: &'static str,
    pub tasks: Vec<TaskRecord>,
}

/// The fixed mock user. Settings toggles never mutate it.
pub fn mock_user() -> UserProfile {
    UserProfile {
        name: "John Doe",
        email: "john.doe@example.com",
        avatar: "https://i.pravatar.cc/150?img=8",
        plan: "Free",
        tasks: vec![
            TaskRecord {
                id: 1,
                query: "Book a flight to NYC",
                date: NaiveDate::from_ymd_opt(2023, 5, 15).expect("valid date"),
                completed: true,
            },
            TaskRecord {
                id: 2,
                query: "Find best restaurants in San Francisco",
                date: NaiveDate::from_ymd_opt(2023, 5, 12).expect("valid date"),
                completed: true,
            },
            TaskRecord {
                id: 3,
                query: "Summarize quarterly report",
                date: NaiveDate::from_ymd_opt(2023, 5, 10).expect("valid date"),
                completed: false,
            },
        ],
    }
}

/// Settings toggles on the profile page.
///
/// All of these are placeholders: flipping them changes local state only and
/// nothing is persisted. The one persisted preference, dark mode, lives in
/// [`crate::config::Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSettings {
    pub notifications: bool,
    pub remember_preferences: bool,
    pub default_mode: Mode,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            remember_preferences: true,
            default_mode: Mode::Search,
        }
    }
}

impl ProfileSettings {
    /// Flip the notifications toggle
    pub fn toggle_notifications(&mut self) {
        self.notifications = !self.notifications;
    }

    /// Flip the remember-preferences toggle
    pub fn toggle_remember_preferences(&mut self) {
        self.remember_preferences = !self.remember_preferences;
    }

    /// Cycle the default-mode selector
    pub fn cycle_default_mode(&mut self) {
        self.default_mode = self.default_mode.toggled();
    }
}
