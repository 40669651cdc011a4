//! File-name formatting and prompt-time validation.

/// Which kind of file a pipeline is creating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// A part file: gets a `part of` header and a declaration in the primary.
    Part,
    /// A plain sibling file with empty content.
    Plain,
}

/// Outcome of validating raw prompt input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameCheck {
    /// Hard rejection; the input must not be accepted.
    Reject(String),
    /// Advisory only: tells the user what path the input resolves to,
    /// without blocking submission.
    Advise(String),
    /// Input is usable as-is, nothing to say.
    Ok,
}

/// Prompt copy shown when asking for a file name.
#[derive(Debug, Clone)]
pub struct NamePrompt {
    pub kind: FileKind,
    pub placeholder: String,
    pub message: String,
}

impl NamePrompt {
    pub fn for_kind(kind: FileKind) -> Self {
        let path_prefix = match kind {
            FileKind::Part => "part_",
            FileKind::Plain => "",
        };
        let word_prefix = match kind {
            FileKind::Part => "part ",
            FileKind::Plain => "",
        };
        Self {
            kind,
            placeholder: format!("<{path_prefix}file_name> or <path/to/{path_prefix}file>"),
            message: format!(
                "Enter the {word_prefix}file name. If the name contains `/`, a subdirectory \
                 will be created. The new file is created relative to the primary file's directory"
            ),
        }
    }
}

/// Normalize a raw user-entered name into a relative file path.
///
/// Trims surrounding whitespace, replaces inner spaces with underscores, and
/// appends `.dart` when the name does not already contain it.
pub fn format_file_name(raw: &str) -> String {
    let mut formatted = raw.trim().split(' ').collect::<Vec<_>>().join("_");
    if !formatted.contains(".dart") {
        formatted.push_str(".dart");
    }
    formatted
}

/// Validate raw prompt input for the given file kind.
///
/// Part creation hard-rejects any `..` in the input, so a part file can only
/// land in the primary file's directory or below it. Everything else is at
/// most advisory: when formatting would change the input, the user is told
/// what path it resolves to, but submission is never blocked.
pub fn validate_name(raw: &str, kind: FileKind) -> NameCheck {
    if raw.contains("..") && kind == FileKind::Part {
        return NameCheck::Reject(
            "The file name can't contain '..' so the part file can only be in a sub folder."
                .to_string(),
        );
    }

    let resolved = if raw.contains(' ') {
        Some(format_file_name(raw))
    } else if !raw.is_empty() && !raw.trim().ends_with(".dart") {
        Some(format!("{raw}.dart"))
    } else {
        None
    };

    match resolved {
        Some(path) => NameCheck::Advise(format!("The file path will be './{path}'")),
        None => NameCheck::Ok,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_appends_dart_extension() {
        assert_eq!(format_file_name("home"), "home.dart");
    }

    #[test]
    fn test_format_keeps_existing_extension() {
        assert_eq!(format_file_name("home.dart"), "home.dart");
    }

    #[test]
    fn test_format_replaces_spaces_with_underscores() {
        assert_eq!(format_file_name("home page"), "home_page.dart");
    }

    #[test]
    fn test_format_trims_surrounding_whitespace() {
        assert_eq!(format_file_name("  home.dart "), "home.dart");
    }

    #[test]
    fn test_format_preserves_subdirectory_path() {
        assert_eq!(format_file_name("views/home"), "views/home.dart");
    }

    #[test]
    fn test_dotdot_rejected_for_part_creation() {
        assert!(matches!(
            validate_name("../escape", FileKind::Part),
            NameCheck::Reject(_)
        ));
    }

    #[test]
    fn test_dotdot_allowed_for_plain_files() {
        // Only part creation forbids traversal; a plain file prompt treats
        // `..` like any other name fragment.
        assert!(!matches!(
            validate_name("../notes", FileKind::Plain),
            NameCheck::Reject(_)
        ));
    }

    #[test]
    fn test_advisory_for_missing_extension() {
        assert_eq!(
            validate_name("home", FileKind::Part),
            NameCheck::Advise("The file path will be './home.dart'".to_string())
        );
    }

    #[test]
    fn test_advisory_for_spaced_name() {
        assert_eq!(
            validate_name("home page", FileKind::Part),
            NameCheck::Advise("The file path will be './home_page.dart'".to_string())
        );
    }

    #[test]
    fn test_no_message_for_complete_name() {
        assert_eq!(validate_name("home.dart", FileKind::Part), NameCheck::Ok);
    }

    #[test]
    fn test_no_message_for_empty_input() {
        assert_eq!(validate_name("", FileKind::Part), NameCheck::Ok);
    }
}
