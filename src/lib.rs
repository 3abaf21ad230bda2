//! Logbook CLI - Render Things logbook exports as markdown checklists
//!
//! The rendering core groups tasks by area (or project), emits a section
//! heading with per-group sub-headings, and formats each task into GitHub-style
//! task-list syntax with optional notes and subtasks. The CLI wraps it with a
//! JSON task-export reader and a TOML settings file.

pub mod domain;
pub mod render;
pub mod settings;
pub mod cli;

pub use domain::{SubTask, Task, TaskStatus};
pub use settings::Settings;
