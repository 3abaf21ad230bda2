//! Stable grouping of tasks into named buckets
//!
//! A single forward pass over the input: buckets appear in first-seen key
//! order and each bucket keeps input order. This is bucketing, not sorting.

use indexmap::IndexMap;

use crate::domain::Task;

/// Groups items into an insertion-ordered map keyed by `key`
pub fn group_by<'a, T, F>(items: &'a [T], key: F) -> IndexMap<String, Vec<&'a T>>
where
    F: Fn(&T) -> String,
{
    let mut groups: IndexMap<String, Vec<&T>> = IndexMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item);
    }
    groups
}

/// Returns the grouping key for a task
///
/// Area wins when present; otherwise the project name when project grouping
/// is enabled. The empty string is the headingless catch-all bucket.
pub fn group_key(task: &Task, by_project: bool) -> String {
    if !task.area.is_empty() {
        task.area.clone()
    } else if by_project {
        task.project.clone()
    } else {
        String::new()
    }
}
