//! Host capability interface and the terminal implementation.
//!
//! The pipelines never touch the file system or the user directly; they go
//! through [`Host`], which keeps the core host-independent and lets tests
//! substitute a scripted implementation that records every call.

use async_trait::async_trait;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io;
use std::path::Path;
use tracing::{debug, warn};

use crate::name::{validate_name, NameCheck, NamePrompt};

/// The services a host environment must provide to the pipelines.
///
/// An editor integration would back these with its own document and prompt
/// primitives; the shipped implementation is [`TerminalHost`].
#[async_trait]
pub trait Host: Send + Sync {
    /// Whether a file or directory exists at `path`.
    async fn exists(&self, path: &Path) -> bool;

    /// Read the full contents of the file at `path`.
    async fn read_all(&self, path: &Path) -> io::Result<String>;

    /// Write `content` to `path`, replacing any previous content.
    async fn write_all(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Create `path` and all missing parents. Idempotent.
    async fn mkdir_recursive(&self, path: &Path) -> io::Result<()>;

    /// Ask the user for a file name. `None` means the prompt was dismissed.
    async fn prompt_text(&self, prompt: &NamePrompt) -> Option<String>;

    /// Bring the newly created file to the user's attention.
    async fn focus_document(&self, path: &Path);

    /// Show an informational message.
    fn notify_info(&self, message: &str);

    /// Show an error message.
    fn notify_error(&self, message: &str);
}

/// Host backed by the terminal: tokio fs for file operations, an
/// interactive input prompt for names, stderr for notifications.
#[derive(Debug, Default)]
pub struct TerminalHost {
    /// Suppress informational output (errors are always shown).
    pub quiet: bool,
}

impl TerminalHost {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

#[async_trait]
impl Host for TerminalHost {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }

    async fn read_all(&self, path: &Path) -> io::Result<String> {
        debug!("Reading file: {}", path.display());
        tokio::fs::read_to_string(path).await
    }

    async fn write_all(&self, path: &Path, content: &str) -> io::Result<()> {
        debug!("Writing {} bytes to: {}", content.len(), path.display());
        tokio::fs::write(path, content).await
    }

    async fn mkdir_recursive(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }

    async fn prompt_text(&self, prompt: &NamePrompt) -> Option<String> {
        let kind = prompt.kind;
        let prompt = prompt.clone();
        // WHY: dialoguer blocks on terminal input, so it runs on the
        // blocking pool instead of stalling the runtime.
        let entered = tokio::task::spawn_blocking(move || {
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("{} {}", prompt.message, prompt.placeholder))
                .allow_empty(true)
                .validate_with(move |input: &String| -> Result<(), String> {
                    match validate_name(input, kind) {
                        // Only traversal blocks resubmission; advisory text
                        // is shown after the fact and never gates input.
                        NameCheck::Reject(message) => Err(message),
                        NameCheck::Advise(_) | NameCheck::Ok => Ok(()),
                    }
                })
                .interact_text()
        })
        .await;

        let entered = match entered {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!("Name prompt failed: {}", e);
                return None;
            }
            Err(e) => {
                warn!("Prompt task panicked: {}", e);
                return None;
            }
        };

        // Empty submission means the user backed out.
        if entered.trim().is_empty() {
            None
        } else {
            if let NameCheck::Advise(message) = validate_name(&entered, kind) {
                self.notify_info(&message);
            }
            Some(entered)
        }
    }

    async fn focus_document(&self, path: &Path) {
        // A terminal cannot open an editor tab; printing the path is the
        // closest equivalent and keeps the pipeline contract satisfied.
        println!("{}", path.display());
    }

    fn notify_info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    fn notify_error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}
