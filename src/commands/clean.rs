//! Clean command implementation
//!
//! Removes built archives from the local solbuild repo, then reindexes.
//! A removal failure is reported together with the names already removed,
//! and indexing still runs so the repo metadata matches what is left on
//! disk. An indexing failure is fatal.

use console::style;

use crate::cli::CleanArgs;
use crate::error::Result;
use crate::repo::LocalRepo;
use crate::runner::CommandRunner;

pub fn run(repo: &LocalRepo, runner: &dyn CommandRunner, args: &CleanArgs) -> Result<()> {
    println!("Looking for packages to clean");

    if args.dry_run {
        let mut candidates = repo.list_archives()?;
        candidates.retain(|name| !args.keep.iter().any(|p| name.starts_with(p.as_str())));
        if candidates.is_empty() {
            println!("Nothing to remove");
        } else {
            println!("Would remove:");
            for name in &candidates {
                println!("  - {}", name);
            }
        }
        return Ok(());
    }

    let outcome = repo.remove_archives(&args.keep);

    if outcome.removed.is_empty() {
        println!("Nothing to remove");
    } else {
        println!("{} Removed the following packages:", style("✓").green());
        for name in &outcome.removed {
            println!("  - {}", name);
        }
    }

    // Partial failure: report and reindex anyway so the repo metadata
    // matches whatever is left on disk.
    if let Some(e) = outcome.error {
        eprintln!("{} Error cleaning packages: {}", style("✗").red(), e);
    }

    println!("Indexing local repo");
    repo.index(runner)?;
    println!("{} Local repo indexed", style("✓").green());

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::runner::test_support::FakeRunner;
    use std::fs;
    use tempfile::TempDir;

    fn repo_with_files(names: &[&str]) -> (TempDir, LocalRepo) {
        let temp = TempDir::new().unwrap();
        for name in names {
            fs::write(temp.path().join(name), b"archive").unwrap();
        }
        let repo = LocalRepo::at(temp.path());
        (temp, repo)
    }

    fn args() -> CleanArgs {
        CleanArgs {
            dry_run: false,
            keep: Vec::new(),
        }
    }

    #[test]
    fn test_clean_removes_and_indexes() {
        let (temp, repo) = repo_with_files(&["foo-1.0.eopkg", "bar-2.0.eopkg"]);
        let runner = FakeRunner::default();

        run(&repo, &runner, &args()).unwrap();

        assert!(!temp.path().join("foo-1.0.eopkg").exists());
        assert!(!temp.path().join("bar-2.0.eopkg").exists());

        // Indexer runs from the repo directory
        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].cwd, temp.path());
        assert_eq!(calls[0].args[0], "index");
    }

    #[test]
    fn test_clean_dry_run_removes_nothing() {
        let (temp, repo) = repo_with_files(&["foo-1.0.eopkg"]);
        let runner = FakeRunner::default();

        run(
            &repo,
            &runner,
            &CleanArgs {
                dry_run: true,
                keep: Vec::new(),
            },
        )
        .unwrap();

        assert!(temp.path().join("foo-1.0.eopkg").exists());
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_clean_keep_prefix() {
        let (temp, repo) = repo_with_files(&["foo-1.0.eopkg", "bar-2.0.eopkg"]);
        let runner = FakeRunner::default();

        run(
            &repo,
            &runner,
            &CleanArgs {
                dry_run: false,
                keep: vec!["foo".to_string()],
            },
        )
        .unwrap();

        assert!(temp.path().join("foo-1.0.eopkg").exists());
        assert!(!temp.path().join("bar-2.0.eopkg").exists());
    }

    #[test]
    fn test_clean_index_failure_is_fatal() {
        let (_temp, repo) = repo_with_files(&["foo-1.0.eopkg"]);
        let runner = FakeRunner {
            fail_with_status: Some(1),
            ..FakeRunner::default()
        };

        assert!(run(&repo, &runner, &args()).is_err());
    }
}
