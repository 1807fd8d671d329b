//! Local solbuild repository operations
//!
//! The local repo is a single pre-existing directory that solbuild serves
//! built packages from. This module owns listing, removing and adding
//! `.eopkg` archives there, plus reindexing through `eopkg`. The directory
//! itself is never created or deleted here.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SolpkgError};
use crate::runner::CommandRunner;

/// Where solbuild looks for locally built packages.
pub const DEFAULT_PATH: &str = "/var/lib/solbuild/local";

/// Suffix identifying a built package archive.
pub const ARCHIVE_SUFFIX: &str = ".eopkg";

/// Mode set on archives copied into the repo (rw for root, read for others).
const ARCHIVE_MODE: u32 = 0o644;

/// Result of a repo clean: names removed in removal order, and the first
/// removal error if one stopped the sweep. No rollback is attempted.
pub struct CleanOutcome {
    pub removed: Vec<String>,
    pub error: Option<SolpkgError>,
}

/// Handle to the local solbuild repository directory.
pub struct LocalRepo {
    root: PathBuf,
}

impl LocalRepo {
    /// Open the repo at the well-known solbuild path.
    pub fn system() -> Self {
        Self::at(DEFAULT_PATH)
    }

    /// Open the repo at an explicit path. Tests point this at a temp dir.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List archive filenames in the repo, in directory enumeration order.
    pub fn list_archives(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root).map_err(|e| SolpkgError::ReadDirFailed {
            path: self.root.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut archives = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SolpkgError::ReadDirFailed {
                path: self.root.display().to_string(),
                reason: e.to_string(),
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(ARCHIVE_SUFFIX) {
                archives.push(name);
            }
        }

        Ok(archives)
    }

    /// Remove every archive in the repo, except names starting with one of
    /// the `keep` prefixes.
    ///
    /// Stops at the first removal failure and reports it alongside whatever
    /// was already removed.
    pub fn remove_archives(&self, keep: &[String]) -> CleanOutcome {
        let candidates = match self.list_archives() {
            Ok(names) => names,
            Err(e) => {
                return CleanOutcome {
                    removed: Vec::new(),
                    error: Some(e),
                };
            }
        };

        let mut removed = Vec::new();
        for name in candidates {
            if keep.iter().any(|prefix| name.starts_with(prefix.as_str())) {
                continue;
            }
            let path = self.root.join(&name);
            if let Err(e) = fs::remove_file(&path) {
                return CleanOutcome {
                    removed,
                    error: Some(SolpkgError::RemoveFailed {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    }),
                };
            }
            removed.push(name);
        }

        CleanOutcome {
            removed,
            error: None,
        }
    }

    /// Copy one archive into the repo, keeping its base filename.
    ///
    /// An existing archive of the same name is overwritten. The copy is
    /// chmodded to 0644 so the repo stays world-readable regardless of the
    /// build umask.
    pub fn add_archive(&self, source: &Path) -> Result<()> {
        let name = source
            .file_name()
            .ok_or_else(|| SolpkgError::CopyFailed {
                path: source.display().to_string(),
                reason: "not a file path".to_string(),
            })?;
        let dest = self.root.join(name);

        fs::copy(source, &dest).map_err(|e| SolpkgError::CopyFailed {
            path: source.display().to_string(),
            reason: e.to_string(),
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&dest, fs::Permissions::from_mode(ARCHIVE_MODE)).map_err(|e| {
                SolpkgError::CopyFailed {
                    path: dest.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(())
    }

    /// Reindex the repo: `eopkg index --skip-signing <repo>`, run from the
    /// repo directory. Only the exit status matters; eopkg's own output is
    /// passed through.
    pub fn index(&self, runner: &dyn CommandRunner) -> Result<()> {
        let repo = self.root.display().to_string();
        runner.run(
            Path::new("eopkg"),
            &["index", "--skip-signing", &repo],
            &self.root,
        )
    }
}
