//! File-level compile errors.

use std::path::PathBuf;

use jsp_scanner::ScanError;

/// Failure while compiling one template file.
///
/// Every variant carries the offending path; scan failures additionally
/// carry the 1-based line and column of the open delimiter.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// The template failed to scan. No output file is written.
    #[error("{}:{line}:{column}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        line: u32,
        column: u32,
        #[source]
        source: ScanError,
    },

    /// Reading the template or writing the generated source failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template path has no extension to replace with `.java`.
    #[error("{}: template path has no file extension", .path.display())]
    MissingExtension { path: PathBuf },

    /// The template path is not valid UTF-8, so no qualified class name
    /// can be derived from it.
    #[error("{}: template path is not valid UTF-8", .path.display())]
    NonUtf8Path { path: PathBuf },
}
