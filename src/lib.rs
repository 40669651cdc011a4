pub mod error;
pub mod host;
pub mod inserter;
pub mod name;
pub mod partref;
pub mod pipeline;

// Re-export main types for convenient access
pub use error::{Error, Outcome, Result};
pub use host::{Host, TerminalHost};
pub use name::{format_file_name, validate_name, FileKind, NameCheck, NamePrompt};

// Re-export the core routines so callers don't need the module paths
pub use inserter::insert_part_declaration;
pub use partref::part_of_reference;
pub use pipeline::{create_part_file, create_plain_file};
