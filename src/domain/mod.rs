//! Domain models for Logbook CLI
//!
//! Read-only task records as exported from the Things logbook, without any
//! I/O concerns.

mod task;

pub use task::{SubTask, Task, TaskStatus};
