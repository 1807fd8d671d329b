//! Copy command implementation
//!
//! Copies built `.eopkg` archives from a directory (normally the package
//! build directory the packager is standing in) into the local solbuild
//! repo, then reindexes. A failed copy of one archive is reported and
//! skipped so the rest still land in the repo.

use std::fs;
use std::path::Path;

use console::style;

use crate::error::{Result, SolpkgError};
use crate::repo::{ARCHIVE_SUFFIX, LocalRepo};
use crate::runner::CommandRunner;

pub fn run(repo: &LocalRepo, runner: &dyn CommandRunner, source_dir: &Path) -> Result<()> {
    println!("Looking for packages to copy");

    let packages = find_archives(source_dir)?;
    if packages.is_empty() {
        println!("No packages to copy");
        return Ok(());
    }

    println!("{} Found the following packages:", style("✓").green());
    for name in &packages {
        println!("  - {}", name);
    }

    for name in &packages {
        if let Err(e) = repo.add_archive(&source_dir.join(name)) {
            eprintln!(
                "{} Error copying package '{}': {}",
                style("✗").red(),
                name,
                e
            );
        }
    }

    println!("Indexing local repo");
    repo.index(runner)?;
    println!("{} Local repo indexed", style("✓").green());

    Ok(())
}

/// Archive filenames in `dir`, in directory enumeration order.
fn find_archives(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| SolpkgError::ReadDirFailed {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut archives = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SolpkgError::ReadDirFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(ARCHIVE_SUFFIX) {
            archives.push(name);
        }
    }

    Ok(archives)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::runner::test_support::FakeRunner;
    use tempfile::TempDir;

    #[test]
    fn test_copy_moves_archives_and_indexes() {
        let build_dir = TempDir::new().unwrap();
        fs::write(build_dir.path().join("nano-7.2.eopkg"), b"a").unwrap();
        fs::write(build_dir.path().join("nano-dbginfo-7.2.eopkg"), b"b").unwrap();
        fs::write(build_dir.path().join("pspec_x86_64.xml"), b"x").unwrap();

        let repo_dir = TempDir::new().unwrap();
        let repo = LocalRepo::at(repo_dir.path());
        let runner = FakeRunner::default();

        run(&repo, &runner, build_dir.path()).unwrap();

        let mut names = repo.list_archives().unwrap();
        names.sort();
        assert_eq!(names, vec!["nano-7.2.eopkg", "nano-dbginfo-7.2.eopkg"]);
        assert_eq!(runner.calls.borrow().len(), 1);
    }

    #[test]
    fn test_copy_nothing_found_skips_indexer() {
        let build_dir = TempDir::new().unwrap();
        let repo_dir = TempDir::new().unwrap();
        let repo = LocalRepo::at(repo_dir.path());
        let runner = FakeRunner::default();

        run(&repo, &runner, build_dir.path()).unwrap();

        assert!(repo.list_archives().unwrap().is_empty());
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_copy_continues_past_per_file_errors() {
        let build_dir = TempDir::new().unwrap();
        fs::write(build_dir.path().join("good-1.0.eopkg"), b"a").unwrap();
        // A directory with the archive suffix makes fs::copy fail for it
        fs::create_dir(build_dir.path().join("broken-1.0.eopkg")).unwrap();

        let repo_dir = TempDir::new().unwrap();
        let repo = LocalRepo::at(repo_dir.path());
        let runner = FakeRunner::default();

        run(&repo, &runner, build_dir.path()).unwrap();

        // The good archive landed and indexing still ran
        assert_eq!(repo.list_archives().unwrap(), vec!["good-1.0.eopkg"]);
        assert_eq!(runner.calls.borrow().len(), 1);
    }

    #[test]
    fn test_copy_unreadable_source_dir() {
        let repo_dir = TempDir::new().unwrap();
        let repo = LocalRepo::at(repo_dir.path());
        let runner = FakeRunner::default();

        let result = run(&repo, &runner, Path::new("/nonexistent/build-dir"));
        assert!(result.is_err());
    }
}
