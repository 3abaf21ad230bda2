//! Markdown text helpers

/// Returns the heading level of a markdown heading line
///
/// The level is the number of leading `#` characters; a string without a
/// leading `#` has level 0. No validation beyond that, a malformed heading
/// just degrades to 0.
pub fn heading_level(heading: &str) -> usize {
    heading.chars().take_while(|&c| c == '#').count()
}

/// Builds an ATX heading line at the given level
pub fn to_heading(text: &str, level: usize) -> String {
    format!("{} {}", "#".repeat(level), text)
}

/// Resolves an editor-style indentation preference to a literal string
pub fn indent(use_tabs: bool, tab_size: usize) -> String {
    if use_tabs {
        "\t".to_string()
    } else {
        " ".repeat(tab_size)
    }
}
