//! Init command implementation

use std::env;

use console::style;

use crate::cli::InitArgs;
use crate::error::{Result, SolpkgError};
use crate::runner::SystemRunner;
use crate::scaffold;

pub fn run(args: InitArgs) -> Result<()> {
    let cwd = env::current_dir().map_err(|e| SolpkgError::IoError {
        message: format!("failed to get current directory: {}", e),
    })?;

    let dir = scaffold::init_package(
        &cwd,
        &args.name,
        &args.url,
        args.skip_maintainers,
        &SystemRunner,
    )?;

    println!(
        "{} Package repo initialized at {}",
        style("✓").green(),
        dir.display()
    );
    Ok(())
}
