//! Task domain model
//!
//! Tasks come out of a Things logbook export: finished units of work with an
//! area/project, tags, free-text notes and checklist subtasks. Every field is
//! defaulted so a partial export record still renders instead of failing.

use serde::{Deserialize, Serialize};

/// Completion state of a logbook task
///
/// Logbook entries are always finished; `Open` only occurs in hand-written
/// input. Only `Cancelled` changes the checkbox mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Open,
    Completed,
    Cancelled,
}

impl TaskStatus {
    /// Returns true if the task was cancelled rather than completed
    pub fn is_cancelled(&self) -> bool {
        matches!(self, TaskStatus::Cancelled)
    }

    /// Returns a display label for the status
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Open => "open",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
        }
    }
}

/// A checklist item nested under a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SubTask {
    pub title: String,
    pub completed: bool,
}

impl SubTask {
    /// Creates a new subtask
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }
}

/// One logbook-worthy unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Task {
    /// Opaque external identifier, embedded in the rendered link
    pub uuid: String,

    /// Task title
    pub title: String,

    /// Completion state
    pub status: TaskStatus,

    /// Area name; empty when the task has no area
    pub area: String,

    /// Project name; empty when the task has no project
    pub project: String,

    /// Tag strings as exported; may contain empty entries
    pub tags: Vec<String>,

    /// Free-text notes, possibly multi-line
    pub notes: String,

    /// Checklist items in export order
    pub subtasks: Vec<SubTask>,
}

impl Task {
    /// Creates a task with the given identifier and title
    pub fn new(uuid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            title: title.into(),
            status: TaskStatus::Completed,
            ..Self::default()
        }
    }
}
