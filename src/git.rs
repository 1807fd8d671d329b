//! Git operations for package source repositories
//!
//! Cloning from the upstream Solus phabricator and initializing fresh
//! package repos. Upstream clones are anonymous HTTPS, so no credential
//! callbacks are wired up.

use std::path::Path;

use git2::{FetchOptions, Repository, build::RepoBuilder};

use crate::error::{Result, SolpkgError};

/// Base URL for upstream Solus package sources.
const UPSTREAM_BASE: &str = "https://dev.getsol.us/source";

/// Clone URL for a named package in the official Solus repo.
pub fn package_url(name: &str) -> String {
    format!("{}/{}.git", UPSTREAM_BASE, name)
}

/// Clone a git repository to a target directory.
///
/// Refuses to clone over an existing path; libgit2 would otherwise fail
/// part-way with a less useful message.
pub fn clone(url: &str, target: &Path) -> Result<Repository> {
    if target.exists() {
        return Err(SolpkgError::TargetExists {
            path: target.display().to_string(),
        });
    }

    let fetch_options = FetchOptions::new();
    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);

    builder
        .clone(url, target)
        .map_err(|e| SolpkgError::GitCloneFailed {
            url: url.to_string(),
            reason: e.message().to_string(),
        })
}

/// Initialize an empty git repository at `path`.
pub fn init(path: &Path) -> Result<Repository> {
    Repository::init(path).map_err(|e| SolpkgError::GitInitFailed {
        path: path.display().to_string(),
        reason: e.message().to_string(),
    })
}
