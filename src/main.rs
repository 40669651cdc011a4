use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dartpart::error::{Error, Outcome};
use dartpart::host::{Host, TerminalHost};
use dartpart::pipeline;

#[derive(Parser, Debug)]
#[command(name = "dartpart")]
#[command(about = "Scaffold Dart part files and wire up their part declarations")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Suppress informational messages
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a part file relative to a primary Dart file and declare it there
    Part {
        /// The primary .dart file the new part belongs to
        primary_file: PathBuf,

        /// File name or relative path; prompts interactively when omitted
        #[arg(long)]
        name: Option<String>,
    },
    /// Create a plain empty file next to a primary Dart file
    File {
        /// The .dart file the new file is created relative to
        primary_file: PathBuf,

        /// File name or relative path; prompts interactively when omitted
        #[arg(long)]
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: logs go to stderr so they never interleave with the interactive
    // prompt or the created-path output on stdout
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let host = TerminalHost::new(args.quiet);

    let result = match args.command {
        Command::Part { ref primary_file, ref name } => {
            pipeline::create_part_file(&host, primary_file, name.clone()).await
        }
        Command::File { ref primary_file, ref name } => {
            pipeline::create_plain_file(&host, primary_file, name.clone()).await
        }
    };

    match result {
        Ok(Outcome::Created(path)) => {
            info!("Done: {}", path.display());
            Ok(())
        }
        Ok(Outcome::Cancelled) => {
            host.notify_info("Cancelled; no file created.");
            Ok(())
        }
        // The anticipated failures get a user-facing message and a clean
        // non-zero exit; everything else propagates with its io context.
        Err(err @ (Error::InvalidContext { .. } | Error::InvalidName { .. } | Error::TargetExists { .. })) => {
            host.notify_error(&err.to_string());
            std::process::exit(1);
        }
        Err(Error::Io(err)) => Err(anyhow::Error::new(err).context("file operation failed")),
    }
}
