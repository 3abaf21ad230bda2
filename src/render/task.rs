//! Per-task markdown formatting
//!
//! One task becomes a checklist block: a primary `- [<mark>]` line with a
//! `things:///` link and hashtag-style tags, then indented note lines and
//! subtask checkboxes.

use crate::domain::Task;
use crate::settings::Settings;

/// Lowercases a tag and joins whitespace runs with single hyphens
fn slugify_tag(tag: &str) -> String {
    let mut slug = String::with_capacity(tag.len());
    let mut in_whitespace = false;

    for ch in tag.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
            slug.extend(ch.to_lowercase());
        }
    }

    slug
}

/// Formats one task as a markdown checklist block
///
/// The block is the primary line, then note lines (when enabled), then
/// subtask lines, joined with `\n`. Subtasks render regardless of the notes
/// toggle. Lines that compose to the empty string are dropped.
pub fn format_task(task: &Task, settings: &Settings, indent: &str) -> String {
    let tags = task
        .tags
        .iter()
        .filter(|tag| !tag.is_empty())
        .map(|tag| format!("#{}{}", settings.tag_prefix, slugify_tag(tag)))
        .collect::<Vec<_>>()
        .join(" ");

    let title = format!("[{}](things:///show?id={}) {}", task.title, task.uuid, tags);
    let title = title.trim_end();

    let mark = if task.status.is_cancelled() {
        settings.cancelled_mark.as_str()
    } else {
        "x"
    };

    let mut lines = vec![format!("- [{}] {}", mark, title)];

    if settings.include_notes {
        lines.extend(
            task.notes
                .trim_end()
                .split('\n')
                .filter(|line| !line.is_empty())
                .map(|line| format!("{}{}", indent, line)),
        );
    }

    lines.extend(task.subtasks.iter().map(|subtask| {
        format!(
            "{}- [{}] {}",
            indent,
            if subtask.completed { "x" } else { " " },
            subtask.title
        )
    }));

    lines.retain(|line| !line.is_empty());
    lines.join("\n")
}
