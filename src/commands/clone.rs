//! Clone command implementation
//!
//! Fetches an existing package's source repository from the official Solus
//! phabricator into the current packaging root.

use std::env;

use console::style;

use crate::cli::CloneArgs;
use crate::error::{Result, SolpkgError};
use crate::git;
use crate::scaffold;

pub fn run(args: CloneArgs) -> Result<()> {
    let cwd = env::current_dir().map_err(|e| SolpkgError::IoError {
        message: format!("failed to get current directory: {}", e),
    })?;

    scaffold::check_common(&cwd)?;

    let url = git::package_url(&args.name);
    let target = cwd.join(&args.name);

    println!("Cloning {}", url);
    git::clone(&url, &target)?;

    println!(
        "{} Package repository cloned to {}",
        style("✓").green(),
        target.display()
    );
    Ok(())
}
