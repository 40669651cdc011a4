//! Back-reference resolution for part files.
//!
//! A part file must name its primary file with a `part of '...';` header.
//! When the part file lives in a subdirectory of the primary file's
//! directory, the reference has to climb back out with one `..` per
//! nesting level.

use std::path::MAIN_SEPARATOR;

/// Compute the relative reference a new part file uses to point back at its
/// primary file.
///
/// `new_file_rel_path` is the part file's path relative to the primary
/// file's directory (as entered by the user, e.g. `views/home.dart`);
/// `primary_base_name` is the primary file's name with extension and no
/// directory (e.g. `main.dart`).
///
/// Splitting and joining both use the platform directory separator, matching
/// what the user typed on that platform.
pub fn part_of_reference(new_file_rel_path: &str, primary_base_name: &str) -> String {
    reference_with_separator(new_file_rel_path, primary_base_name, MAIN_SEPARATOR)
}

/// Separator-parameterized core so behavior on either platform family is
/// pinnable from tests.
fn reference_with_separator(rel_path: &str, primary_base_name: &str, separator: char) -> String {
    let mut segments: Vec<&str> = rel_path.split(separator).collect();
    // The final segment is the new file's own name; the rest are the
    // subdirectories it is nested inside.
    segments.pop();

    let mut reference: Vec<&str> = segments.iter().map(|_| "..").collect();
    reference.push(primary_base_name);
    let separator = separator.to_string();
    reference.join(separator.as_str())
}
