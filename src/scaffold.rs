//! Scaffolding for new package source directories
//!
//! Builds the initial layout for a Solus package recipe: a fresh git repo,
//! the `Makefile` hooking into the shared build includes, an optional
//! `MAINTAINERS.md`, and a `package.yml` generated by the `yauto.py` script
//! shipped in the `common` checkout.
//!
//! Steps abort on the first error. Partially created state is left in place
//! for the packager to inspect or remove.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use console::style;

use crate::error::{Result, SolpkgError};
use crate::git;
use crate::runner::CommandRunner;

/// Shared build-includes checkout expected next to every package repo.
pub const COMMON_DIR: &str = "common";

/// Path of the metadata generator inside the `common` checkout.
const YAUTO: &str = "Scripts/yauto.py";

const MAKEFILE: &str = "include ../Makefile.common\n";

const MAINTAINERS: &str = r#"This file is used to indicate primary maintainership for this package. A package may list more than one maintainer to avoid bus factor issues. People on this list may be considered "subject-matter experts". Please note that Solus staff may need to perform necessary rebuilds, upgrades, or security fixes as part of the normal maintenance of the Solus package repository. If you believe this package requires an update, follow documentation from https://help.getsol.us/docs/packaging/procedures/request-a-package-update. In the event that this package becomes insufficiently maintained, the Solus staff reserves the right to request a new maintainer, or deprecate and remove this package from the repository entirely.

- Your Name
  - Matrix: @you:matrix.org
  - Email: you@example.com
"#;

/// Ensure the shared `common` checkout exists under `cwd`.
///
/// Both `init` and `clone` require it: scaffolded Makefiles include
/// `../Makefile.common`, and `yauto.py` lives inside it.
pub fn check_common(cwd: &Path) -> Result<PathBuf> {
    let common = cwd.join(COMMON_DIR);
    if common.is_dir() {
        Ok(common)
    } else {
        Err(SolpkgError::CommonNotFound)
    }
}

/// Create and populate a new package source directory under `cwd`.
pub fn init_package(
    cwd: &Path,
    name: &str,
    source_url: &str,
    skip_maintainers: bool,
    runner: &dyn CommandRunner,
) -> Result<PathBuf> {
    let common = check_common(cwd)?;
    let package_dir = cwd.join(name);

    fs::create_dir(&package_dir).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => SolpkgError::TargetExists {
            path: package_dir.display().to_string(),
        },
        _ => SolpkgError::IoError {
            message: format!("failed to create '{}': {}", package_dir.display(), e),
        },
    })?;

    println!("{} Creating git repo", style("•").cyan());
    git::init(&package_dir)?;

    println!("{} Writing Makefile", style("•").cyan());
    write_template(&package_dir.join("Makefile"), MAKEFILE)?;

    if skip_maintainers {
        println!("{} Skipping maintainers file", style("•").cyan());
    } else {
        println!("{} Writing maintainers file", style("•").cyan());
        write_template(&package_dir.join("MAINTAINERS.md"), MAINTAINERS)?;
    }

    println!("{} Running yauto.py to generate package.yml", style("•").cyan());
    runner.run(&common.join(YAUTO), &[source_url], &package_dir)?;

    Ok(package_dir)
}

fn write_template(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| SolpkgError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
