//! Export functionality for the results panel.
//!
//! Backs the copy and share affordances: renders a finished run to a
//! clipboard- or file-friendly document.

use serde_json::json;

use crate::session::{RunResults, TaskRun};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Markdown with headers and metadata
    #[default]
    Markdown,
    /// JSON for programmatic consumption
    Json,
    /// Plain text for simple copy-paste
    PlainText,
}

impl ExportFormat {
    /// Get the display name for this format
    pub fn name(self) -> &'static str {
        match self {
            Self::Markdown => "Markdown",
            Self::Json => "JSON",
            Self::PlainText => "Plain Text",
        }
    }

    /// Get the file extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
            Self::PlainText => "txt",
        }
    }

    /// Cycle to the next export format
    pub fn next(self) -> Self {
        match self {
            Self::Markdown => Self::Json,
            Self::Json => Self::PlainText,
            Self::PlainText => Self::Markdown,
        }
    }

    /// List all available formats
    pub fn all() -> &'static [Self] {
        &[Self::Markdown, Self::Json, Self::PlainText]
    }
}

/// Render a finished run to the given format
pub fn render_results(results: &RunResults, query: &str, format: ExportFormat) -> String {
    match format {
        ExportFormat::Markdown => render_markdown(results, query),
        ExportFormat::Json => render_json(results, query),
        ExportFormat::PlainText => render_plain_text(results, query),
    }
}

fn render_markdown(results: &RunResults, query: &str) -> String {
    let mut out = String::new();
    match results {
        RunResults::Search(hits) => {
            out.push_str(&format!("# Search Results\n\nQuery: `{}`\n\n", query));
            for hit in hits {
                out.push_str(&format!("## {}\n\n{}\n\n", hit.title, hit.content));
            }
        }
        RunResults::Agent(runs) => {
            out.push_str(&format!("# Task Completed\n\nQuery: `{}`\n\n", query));
            for run in runs {
                out.push_str(&format!(
                    "## {}\n\n- Agent: {}\n- Status: {}\n\n{}\n\n",
                    run.task,
                    run.agent,
                    run.status.as_str(),
                    run.result
                ));
            }
        }
    }
    out
}

fn render_json(results: &RunResults, query: &str) -> String {
    let payload = match results {
        RunResults::Search(hits) => json!({
            "query": query,
            "mode": "search",
            "results": hits,
        }),
        RunResults::Agent(runs) => json!({
            "query": query,
            "mode": "agent",
            "results": runs,
        }),
    };
    serde_json::to_string_pretty(&payload).unwrap_or_default()
}

fn render_plain_text(results: &RunResults, query: &str) -> String {
    let mut out = format!("Query: {}\n\n", query);
    match results {
        RunResults::Search(hits) => {
            for hit in hits {
                out.push_str(&format!("{}\n{}\n\n", hit.title, hit.content));
            }
        }
        RunResults::Agent(runs) => {
            for run in runs {
                out.push_str(&render_task_line(run));
            }
        }
    }
    out
}

fn render_task_line(run: &TaskRun) -> String {
    format!(
        "{} ({}) [{}]\n{}\n\n",
        run.task,
        run.agent,
        run.status.as_str(),
        run.result
    )
}
