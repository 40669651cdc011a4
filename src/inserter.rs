//! Declaration insertion into an existing primary file.
//!
//! Dart convention groups `part` declarations with the imports at the top of
//! the file, so the new declaration goes immediately after the last line that
//! already starts with `import` or `part`. Scanning for the last such line
//! (rather than a fixed position) tolerates leading comments, library
//! directives, and other header content before the import block.

use tracing::debug;

/// Insert `declaration` into `text` after the last import/part line.
///
/// Splits on `\n`, so a trailing newline shows up as a trailing empty line
/// element and the output preserves whether the original file ended with a
/// newline. Every original line is carried through byte-for-byte and in
/// order; exactly one declaration line is added, plus one blank line when the
/// declaration block is being started fresh after a run of imports.
///
/// No duplicate detection: inserting the same declaration twice produces two
/// copies.
pub fn insert_part_declaration(text: &str, declaration: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();

    // WHY: index defaults to 0 so a file with no imports or parts still gets
    // the declaration right after its first line instead of failing. That
    // placement can be awkward when line 0 is not a divider; accepted
    // limitation.
    let mut last_header_line = 0usize;
    let mut last_header_is_part = false;
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("import") {
            last_header_line = i;
            last_header_is_part = false;
        } else if trimmed.starts_with("part") {
            last_header_line = i;
            last_header_is_part = true;
        }
    }

    debug!(
        last_header_line,
        last_header_is_part, "Computed insertion point for part declaration"
    );

    let mut output = String::with_capacity(text.len() + declaration.len() + 2);
    for line in &lines[..=last_header_line] {
        output.push_str(line);
        output.push('\n');
    }
    // A blank line separates the first part declaration from a trailing run
    // of imports; when the last header line is already a part, the new one
    // joins that block directly.
    if !last_header_is_part {
        output.push('\n');
    }
    output.push_str(declaration);
    output.push('\n');
    for i in (last_header_line + 1)..lines.len().saturating_sub(1) {
        output.push_str(lines[i]);
        output.push('\n');
    }
    // Final line gets no appended newline; the trailing empty element from
    // the split carries the original file's trailing-newline state.
    output.push_str(lines[lines.len() - 1]);
    output
}
