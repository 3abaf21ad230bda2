//! Markdown rendering engine
//!
//! Turns an ordered sequence of tasks plus resolved settings into one
//! markdown block: the section heading, per-area (or per-project)
//! sub-headings, and a checklist line per task. Pure and total: no I/O, no
//! failure path, malformed input degrades to empty segments.

mod group;
mod lines;
mod task;
pub mod text;

pub use group::{group_by, group_key};
pub use lines::collapse_empty_lines;
pub use task::format_task;

use crate::domain::Task;
use crate::settings::Settings;

/// Renders tasks into a single markdown string
///
/// Tasks are bucketed by area (or project, per settings) in first-seen
/// order. Groups with a non-empty key get a sub-heading one level below the
/// section heading; the empty-key bucket renders its tasks with no heading at
/// all. Blank-line toggles compose independently; the collapser is the only
/// guard against the redundant runs they can produce, and only when enabled.
pub fn render(tasks: &[Task], settings: &Settings) -> String {
    let groups = group_by(tasks, |t| group_key(t, settings.group_by_project));
    let level = text::heading_level(&settings.section_heading);

    let mut output = vec![settings.section_heading.clone()];
    if settings.newline_after_section_heading {
        output.push(String::new());
    }

    for (heading, group) in &groups {
        if !heading.is_empty() {
            if settings.newline_before_headings {
                output.push(String::new());
            }

            output.push(text::to_heading(heading, level + 1));

            if settings.newline_after_headings {
                output.push(String::new());
            }
        }

        output.extend(
            group
                .iter()
                .map(|task| format_task(task, settings, &settings.tab)),
        );
    }

    if settings.collapse_empty_lines {
        return collapse_empty_lines(&output).join("\n");
    }

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SubTask;

    fn settings() -> Settings {
        let mut settings = Settings::default();
        settings.include_notes = false;
        settings
    }

    fn task(uuid: &str, title: &str, area: &str) -> Task {
        let mut task = Task::new(uuid, title);
        task.area = area.to_string();
        task
    }

    #[test]
    fn single_task_under_area_heading() {
        let mut t = task("ABC", "Title", "Work");
        t.tags = vec!["tag".to_string()];

        let output = render(&[t], &settings());
        assert_eq!(
            output,
            "## Logbook\n\
             ### Work\n\
             - [x] [Title](things:///show?id=ABC) #logbook/tag"
        );
    }

    #[test]
    fn ungrouped_tasks_get_no_sub_heading() {
        let tasks = vec![task("1", "First", ""), task("2", "Second", "")];

        let output = render(&tasks, &settings());
        assert_eq!(
            output,
            "## Logbook\n\
             - [x] [First](things:///show?id=1)\n\
             - [x] [Second](things:///show?id=2)"
        );
    }

    #[test]
    fn catch_all_bucket_is_headingless_even_when_not_first() {
        let tasks = vec![task("1", "Grouped", "Work"), task("2", "Loose", "")];

        let output = render(&tasks, &settings());
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[1], "### Work");
        assert_eq!(lines[3], "- [x] [Loose](things:///show?id=2)");
    }

    #[test]
    fn sub_heading_depth_follows_section_heading() {
        let mut s = settings();
        s.section_heading = "#### Archive".to_string();

        let output = render(&[task("1", "T", "Work")], &s);
        assert!(output.contains("\n##### Work\n"));
    }

    #[test]
    fn plain_section_heading_yields_level_one_sub_headings() {
        let mut s = settings();
        s.section_heading = "Logbook".to_string();

        let output = render(&[task("1", "T", "Work")], &s);
        assert!(output.contains("\n# Work\n"));
    }

    #[test]
    fn newline_toggles_compose() {
        let mut s = settings();
        s.newline_after_section_heading = true;
        s.newline_before_headings = true;
        s.newline_after_headings = true;

        let output = render(&[task("1", "T", "Work")], &s);
        assert_eq!(
            output,
            "## Logbook\n\n\n### Work\n\n- [x] [T](things:///show?id=1)"
        );
    }

    #[test]
    fn collapsing_merges_toggle_produced_runs() {
        let mut s = settings();
        s.newline_after_section_heading = true;
        s.newline_before_headings = true;
        s.collapse_empty_lines = true;

        let output = render(&[task("1", "T", "Work")], &s);
        assert_eq!(output, "## Logbook\n\n### Work\n- [x] [T](things:///show?id=1)");
    }

    #[test]
    fn notes_block_renders_with_tab_indent() {
        let mut s = settings();
        s.include_notes = true;

        let mut t = task("1", "T", "");
        t.notes = "line1\n\nline2".to_string();

        let output = render(&[t], &s);
        assert_eq!(
            output,
            "## Logbook\n- [x] [T](things:///show?id=1)\n\tline1\n\tline2"
        );
    }

    #[test]
    fn project_grouping_only_when_enabled() {
        let mut t = task("1", "T", "");
        t.project = "Renovation".to_string();

        let without = render(std::slice::from_ref(&t), &settings());
        assert!(!without.contains("Renovation"));

        let mut s = settings();
        s.group_by_project = true;
        let with = render(&[t], &s);
        assert!(with.contains("### Renovation"));
    }

    #[test]
    fn group_order_follows_first_appearance() {
        let tasks = vec![
            task("1", "A", "Home"),
            task("2", "B", "Work"),
            task("3", "C", "Home"),
        ];

        let output = render(&tasks, &settings());
        let home = output.find("### Home").unwrap();
        let work = output.find("### Work").unwrap();
        assert!(home < work);
        assert!(output.find("id=3").unwrap() < work);
    }

    #[test]
    fn no_tasks_renders_heading_only() {
        let output = render(&[], &settings());
        assert_eq!(output, "## Logbook");
    }

    #[test]
    fn subtasks_appear_under_their_task() {
        let mut t = task("1", "T", "");
        t.subtasks = vec![SubTask::new("sub", true)];

        let output = render(&[t], &settings());
        assert!(output.ends_with("\n\t- [x] sub"));
    }
}
