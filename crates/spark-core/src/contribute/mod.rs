//! Agent contribution
//!
//! The submission form for contributing new agents and the mock list of
//! previously submitted ones. Submission never leaves the process: it
//! validates, raises a transient success flag, and is reset by the UI after
//! a fixed delay.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Review status of a submitted agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    /// Convert to the display string
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
        }
    }

    /// Parse from a display string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(SubmissionStatus::Pending),
            "approved" => Some(SubmissionStatus::Approved),
            "rejected" => Some(SubmissionStatus::Rejected),
            _ => None,
        }
    }

    /// Badge text with the leading capital used by the dashboard
    pub fn badge(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "Pending",
            SubmissionStatus::Approved => "Approved",
            SubmissionStatus::Rejected => "Rejected",
        }
    }
}

/// An agent previously submitted by the user
#[derive(Debug, Clone, Serialize)]
pub struct SubmittedAgent {
    pub id: u32,
    pub name: &'static str,
    pub status: SubmissionStatus,
    pub submitted_at: NaiveDate,
    pub usage_count: u32,
    pub rating: f32,
    pub description: &'static str,
    pub tasks: &'static [&'static str],
    pub execution_method: &'static str,
    pub callback_structure: &'static str,
}

/// The fixed mock submission dashboard. Form submission never appends to it.
pub fn submitted_agents() -> Vec<SubmittedAgent> {
    vec![
        SubmittedAgent {
            id: 1,
            name: "Email Assistant",
            status: SubmissionStatus::Approved,
            submitted_at: NaiveDate::from_ymd_opt(2024, 2, 15).expect("valid date"),
            usage_count: 1243,
            rating: 4.8,
            description: "Handles email composition and scheduling",
            tasks: &["Send email", "Schedule email", "Draft reply"],
            execution_method: "sandboxed",
            callback_structure: "webhook",
        },
        SubmittedAgent {
            id: 2,
            name: "Travel Planner",
            status: SubmissionStatus::Pending,
            submitted_at: NaiveDate::from_ymd_opt(2024, 2, 20).expect("valid date"),
            usage_count: 0,
            rating: 0.0,
            description: "Books flights and plans itineraries",
            tasks: &["Book flight", "Find hotels", "Create itinerary"],
            execution_method: "hosted",
            callback_structure: "polling",
        },
    ]
}

/// A permission a contributed agent can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Calendar,
    Email,
    FileSystem,
    Network,
}

impl Permission {
    /// Checkbox label for this permission
    pub fn label(&self) -> &'static str {
        match self {
            Permission::Calendar => "Calendar Access",
            Permission::Email => "Email Access",
            Permission::FileSystem => "File System",
            Permission::Network => "Network",
        }
    }

    /// All permissions, in form order
    pub fn all() -> &'static [Permission] {
        &[
            Permission::Calendar,
            Permission::Email,
            Permission::FileSystem,
            Permission::Network,
        ]
    }
}

/// The new-agent submission form.
///
/// Collects metadata into local state only. Required-field validation is the
/// only check; a successful submit raises `submitted` and the UI resets the
/// whole form after a fixed delay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionForm {
    pub name: String,
    pub description: String,
    pub tasks: String,
    pub permissions: Vec<Permission>,
    submitted: bool,
}

impl SubmissionForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the success banner is showing
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Toggle a permission checkbox
    pub fn toggle_permission(&mut self, permission: Permission) {
        if let Some(pos) = self.permissions.iter().position(|p| *p == permission) {
            self.permissions.remove(pos);
        } else {
            self.permissions.push(permission);
        }
    }

    /// Whether a permission checkbox is ticked
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Supported tasks split from the comma-separated field
    pub fn parsed_tasks(&self) -> Vec<String> {
        self.tasks
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Required-field validation: name, description, and tasks must be
    /// non-blank
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::MissingField("name"));
        }
        if self.description.trim().is_empty() {
            return Err(Error::MissingField("description"));
        }
        if self.tasks.trim().is_empty() {
            return Err(Error::MissingField("tasks"));
        }
        Ok(())
    }

    /// Validate and raise the success flag. No data leaves the process.
    pub fn submit(&mut self) -> Result<()> {
        self.validate()?;
        self.submitted = true;
        Ok(())
    }

    /// Clear every field and the success flag
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> SubmissionForm {
        SubmissionForm {
            name: "News Digest".to_string(),
            description: "Summarizes the morning headlines".to_string(),
            tasks: "Fetch headlines, Summarize, Send digest".to_string(),
            permissions: vec![Permission::Network],
            ..Default::default()
        }
    }

    #[test]
    fn test_submitted_agents_shape() {
        let agents = submitted_agents();
        assert_eq!(agents.len(), 2);
        assert_eq!(agents[0].status, SubmissionStatus::Approved);
        assert_eq!(agents[1].status, SubmissionStatus::Pending);
        assert_eq!(agents[1].usage_count, 0);
    }

    #[test]
    fn test_submitted_agent_ids_unique() {
        let agents = submitted_agents();
        let mut ids: Vec<u32> = agents.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), agents.len());
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            SubmissionStatus::Pending,
            SubmissionStatus::Approved,
            SubmissionStatus::Rejected,
        ] {
            assert_eq!(SubmissionStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(SubmissionStatus::parse("published"), None);
    }

    #[test]
    fn test_validate_requires_all_fields() {
        let mut form = complete_form();
        assert!(form.validate().is_ok());

        form.name = "  ".to_string();
        assert!(matches!(form.validate(), Err(Error::MissingField("name"))));

        let mut form = complete_form();
        form.description.clear();
        assert!(matches!(
            form.validate(),
            Err(Error::MissingField("description"))
        ));

        let mut form = complete_form();
        form.tasks.clear();
        assert!(matches!(form.validate(), Err(Error::MissingField("tasks"))));
    }

    #[test]
    fn test_submit_sets_flag() {
        let mut form = complete_form();
        assert!(!form.submitted());

        form.submit().expect("Complete form should submit");
        assert!(form.submitted());
    }

    #[test]
    fn test_submit_invalid_leaves_flag_down() {
        let mut form = SubmissionForm::new();
        assert!(form.submit().is_err());
        assert!(!form.submitted());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = complete_form();
        form.submit().expect("Complete form should submit");

        form.reset();
        assert_eq!(form, SubmissionForm::default());
        assert!(!form.submitted());
    }

    #[test]
    fn test_toggle_permission() {
        let mut form = SubmissionForm::new();

        form.toggle_permission(Permission::Email);
        assert!(form.has_permission(Permission::Email));

        form.toggle_permission(Permission::Email);
        assert!(!form.has_permission(Permission::Email));
    }

    #[test]
    fn test_parsed_tasks_trims_and_drops_empty() {
        let mut form = complete_form();
        form.tasks = " Send email, , Draft reply ,".to_string();
        assert_eq!(form.parsed_tasks(), vec!["Send email", "Draft reply"]);
    }
}
