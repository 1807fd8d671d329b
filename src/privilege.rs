//! Privilege guard for commands that mutate the local repo
//!
//! The repo lives under `/var/lib/solbuild`, so `clean` and `copy` need
//! root. When run unprivileged, the tool re-executes itself under sudo with
//! the same arguments and inherited stdio, then reports the child's exit
//! status back to the dispatcher. The parent does no work while waiting.

use std::env;
use std::process::Command;

use crate::error::{Result, SolpkgError};

/// Path to the elevation helper.
const SUDO: &str = "/usr/bin/sudo";

/// Outcome of the privilege check.
///
/// Callers branch on this instead of relying on the guard terminating the
/// process: `Escalated` carries the re-executed child's exit status, which
/// the dispatcher exits with.
#[derive(Debug, PartialEq, Eq)]
pub enum Escalation {
    /// Already running as root; proceed in this process.
    AlreadyPrivileged,
    /// The command ran to completion in an elevated child process.
    Escalated(i32),
}

/// Both real and effective uid must be root before touching the repo.
fn is_privileged(uid: u32, euid: u32) -> bool {
    uid == 0 && euid == 0
}

/// Re-run the current invocation under sudo unless already root.
///
/// Forwards the original argument list and inherits stdin/stdout/stderr so
/// sudo can prompt for a password. Blocks until the child exits.
pub fn escalate_if_needed() -> Result<Escalation> {
    // SAFETY: getuid/geteuid only read process credentials.
    let (uid, euid) = unsafe { (libc::getuid(), libc::geteuid()) };
    if is_privileged(uid, euid) {
        return Ok(Escalation::AlreadyPrivileged);
    }

    let exe = env::current_exe().map_err(|e| SolpkgError::ExePathFailed {
        reason: e.to_string(),
    })?;

    let status = Command::new(SUDO)
        .arg(exe)
        .args(env::args().skip(1))
        .status()
        .map_err(|e| SolpkgError::EscalationFailed {
            reason: e.to_string(),
        })?;

    Ok(Escalation::Escalated(status.code().unwrap_or(-1)))
}
