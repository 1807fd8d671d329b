//! Error types for solpkg
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! One enum covers the four error kinds the tool produces: file system
//! access, external process failures, broken preconditions, and privilege
//! escalation failures.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for solpkg operations
#[derive(Error, Diagnostic, Debug)]
pub enum SolpkgError {
    // File system errors
    #[error("Failed to read directory '{path}': {reason}")]
    #[diagnostic(code(solpkg::fs::read_dir_failed))]
    ReadDirFailed { path: String, reason: String },

    #[error("Failed to remove '{path}': {reason}")]
    #[diagnostic(code(solpkg::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    #[error("Failed to copy '{path}': {reason}")]
    #[diagnostic(code(solpkg::fs::copy_failed))]
    CopyFailed { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    #[diagnostic(code(solpkg::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(solpkg::fs::io))]
    IoError { message: String },

    // External process errors
    #[error("Failed to start '{program}': {reason}")]
    #[diagnostic(
        code(solpkg::process::start_failed),
        help("Check that the program is installed and on PATH")
    )]
    CommandStartFailed { program: String, reason: String },

    #[error("'{program}' exited with status {status}")]
    #[diagnostic(code(solpkg::process::exit_nonzero))]
    CommandFailed { program: String, status: i32 },

    // Precondition errors
    #[error("'common' directory not found in the current directory")]
    #[diagnostic(
        code(solpkg::precondition::common_missing),
        help("Run this command from the packaging root, where the shared 'common' checkout lives")
    )]
    CommonNotFound,

    #[error("Target path already exists: {path}")]
    #[diagnostic(code(solpkg::precondition::target_exists))]
    TargetExists { path: String },

    // Privilege errors
    #[error("Failed to resolve own executable path: {reason}")]
    #[diagnostic(code(solpkg::privilege::exe_path))]
    ExePathFailed { reason: String },

    #[error("Failed to run the elevation helper: {reason}")]
    #[diagnostic(
        code(solpkg::privilege::sudo_failed),
        help("The command needs root to modify the local solbuild repo")
    )]
    EscalationFailed { reason: String },

    // Git errors
    #[error("Failed to clone repository: {url}: {reason}")]
    #[diagnostic(
        code(solpkg::git::clone_failed),
        help("Check the package name and network connectivity")
    )]
    GitCloneFailed { url: String, reason: String },

    #[error("Failed to create git repository at '{path}': {reason}")]
    #[diagnostic(code(solpkg::git::init_failed))]
    GitInitFailed { path: String, reason: String },
}

/// Common result type used throughout solpkg
pub type Result<T> = miette::Result<T, SolpkgError>;
