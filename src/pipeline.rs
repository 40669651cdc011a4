//! The two user-facing operations: create a part file, create a plain file.
//!
//! Each pipeline is a strictly sequential chain over the [`Host`] interface:
//! validate context, collect a name, check for collisions, write the new
//! file, and (for parts) rewrite the primary file. There is no rollback: if
//! the primary-file rewrite fails after the part file was written, the part
//! file stays on disk.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Error, Outcome, Result};
use crate::host::Host;
use crate::inserter::insert_part_declaration;
use crate::name::{format_file_name, FileKind, NamePrompt};
use crate::partref::part_of_reference;

/// Create a part file relative to `primary`, wire its `part of` header, and
/// insert the matching `part` declaration into `primary`.
///
/// `name` supplies the answer non-interactively; when `None`, the host is
/// prompted. A dismissed prompt yields [`Outcome::Cancelled`] with no side
/// effects.
pub async fn create_part_file(
    host: &dyn Host,
    primary: &Path,
    name: Option<String>,
) -> Result<Outcome> {
    let primary = working_dart_file(primary)?;
    let directory = primary_directory(&primary);

    let raw = match collect_name(host, FileKind::Part, name).await {
        Some(raw) => raw,
        None => {
            info!("Name prompt dismissed; nothing created");
            return Ok(Outcome::Cancelled);
        }
    };

    // Traversal is rejected here, before any file-system call, regardless of
    // whether the name came from the prompt (which already blocks it) or
    // from a non-interactive caller.
    if raw.contains("..") {
        return Err(Error::InvalidName { name: raw });
    }

    let relative = format_file_name(&raw);
    let target = resolve_target(host, &directory, &relative).await?;

    let primary_base = base_name(&primary);
    let reference = part_of_reference(&relative, &primary_base);
    debug!(%relative, %reference, "Resolved part back-reference");

    if let Some(parent) = target.parent() {
        host.mkdir_recursive(parent).await?;
    }
    host.write_all(&target, &format!("part of '{reference}';\n"))
        .await?;
    info!("Created part file: {}", target.display());

    let text = host.read_all(&primary).await?;
    let declaration = format!("part '{relative}';");
    host.write_all(&primary, &insert_part_declaration(&text, &declaration))
        .await?;
    info!("Declared '{}' in {}", relative, primary.display());

    host.focus_document(&target).await;
    Ok(Outcome::Created(target))
}

/// Create a plain, empty sibling file relative to `primary`.
///
/// No back-reference and no primary-file rewrite; the primary file only
/// anchors the directory the new file is created in.
pub async fn create_plain_file(
    host: &dyn Host,
    primary: &Path,
    name: Option<String>,
) -> Result<Outcome> {
    let primary = working_dart_file(primary)?;
    let directory = primary_directory(&primary);

    let raw = match collect_name(host, FileKind::Plain, name).await {
        Some(raw) => raw,
        None => {
            info!("Name prompt dismissed; nothing created");
            return Ok(Outcome::Cancelled);
        }
    };

    let relative = format_file_name(&raw);
    let target = resolve_target(host, &directory, &relative).await?;

    if let Some(parent) = target.parent() {
        host.mkdir_recursive(parent).await?;
    }
    host.write_all(&target, "").await?;
    info!("Created file: {}", target.display());

    host.focus_document(&target).await;
    Ok(Outcome::Created(target))
}

/// Validate that `path` names a Dart file and return it owned.
fn working_dart_file(path: &Path) -> Result<PathBuf> {
    let is_dart = path.extension().and_then(|e| e.to_str()) == Some("dart");
    if !is_dart {
        return Err(Error::InvalidContext {
            path: path.to_path_buf(),
        });
    }
    Ok(path.to_path_buf())
}

/// Directory the new file is created relative to.
fn primary_directory(primary: &Path) -> PathBuf {
    primary
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Primary file's name with extension, no directory.
fn base_name(primary: &Path) -> String {
    primary
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Use the override when given, otherwise prompt. Empty answers collapse to
/// `None` so both paths share cancellation semantics.
async fn collect_name(host: &dyn Host, kind: FileKind, name: Option<String>) -> Option<String> {
    match name {
        Some(name) if !name.trim().is_empty() => Some(name),
        Some(_) => None,
        None => host.prompt_text(&NamePrompt::for_kind(kind)).await,
    }
}

/// Join the relative path onto the primary's directory, refusing to clobber
/// an existing file.
async fn resolve_target(host: &dyn Host, directory: &Path, relative: &str) -> Result<PathBuf> {
    let target = directory.join(relative);
    if host.exists(&target).await {
        let name = Path::new(relative)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| relative.to_string());
        return Err(Error::TargetExists { name });
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_dart_primary_is_invalid_context() {
        let err = working_dart_file(Path::new("notes.txt")).unwrap_err();
        assert!(matches!(err, Error::InvalidContext { .. }));
    }

    #[test]
    fn test_dart_primary_is_accepted() {
        assert!(working_dart_file(Path::new("lib/main.dart")).is_ok());
    }

    #[test]
    fn test_bare_primary_resolves_to_current_directory() {
        assert_eq!(primary_directory(Path::new("main.dart")), PathBuf::from("."));
    }

    #[test]
    fn test_primary_directory_strips_file_name() {
        assert_eq!(
            primary_directory(Path::new("lib/src/main.dart")),
            PathBuf::from("lib/src")
        );
    }
}
