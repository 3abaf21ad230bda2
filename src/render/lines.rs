//! Blank-line normalization

/// Collapses runs of blank lines into a single empty line
///
/// A line is blank when trimming whitespace leaves nothing. The first blank
/// line of a run is kept as a literal empty string, the rest are dropped.
/// Single forward pass; output is never longer than the input.
pub fn collapse_empty_lines(lines: &[String]) -> Vec<String> {
    let mut result = Vec::with_capacity(lines.len());
    let mut previous_was_empty = false;

    for line in lines {
        let is_empty = line.trim().is_empty();

        if is_empty {
            if !previous_was_empty {
                result.push(String::new());
                previous_was_empty = true;
            }
        } else {
            result.push(line.clone());
            previous_was_empty = false;
        }
    }

    result
}
