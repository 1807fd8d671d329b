//! Narrow seam for external process invocations
//!
//! The indexer and the metadata-generation script are the only external
//! programs this tool runs to completion for their exit status. They go
//! through [`CommandRunner`] so command modules can be tested with a fake
//! that records invocations instead of spawning processes.

use std::path::Path;
use std::process::Command;

use crate::error::{Result, SolpkgError};

/// Runs an external program to completion and classifies the outcome.
///
/// Implementations block until the child exits; no timeouts are applied.
pub trait CommandRunner {
    /// Run `program` with `args`, with the working directory set to `cwd`.
    ///
    /// Returns `Ok(())` only for a zero exit status. A non-zero exit or a
    /// failure to spawn is an error.
    fn run(&self, program: &Path, args: &[&str], cwd: &Path) -> Result<()>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
///
/// Child stdout/stderr are inherited, so tool output (eopkg progress,
/// yauto.py diagnostics) reaches the terminal unmodified.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[&str], cwd: &Path) -> Result<()> {
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| SolpkgError::CommandStartFailed {
                program: program.display().to_string(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SolpkgError::CommandFailed {
                program: program.display().to_string(),
                status: status.code().unwrap_or(-1),
            })
        }
    }
}
