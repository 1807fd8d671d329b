//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

/// solpkg - Solus packaging helper
///
/// Maintain the local solbuild repository and scaffold new package sources.
#[derive(Parser, Debug)]
#[command(
    name = "solpkg",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Helper for Solus packaging",
    long_about = "solpkg maintains the local solbuild repository (copying built .eopkg \
                  archives in, cleaning stale ones out, reindexing with eopkg) and \
                  scaffolds new package source repositories.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  solpkg copy\n    \
                  solpkg clean --keep nano\n    \
                  solpkg init nano https://www.nano-editor.org/dist/v7/nano-7.2.tar.xz\n    \
                  solpkg clone nano"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove eopkg archives from the local solbuild repo and reindex
    Clean(CleanArgs),

    /// Copy eopkg archives from the current directory into the local repo and reindex
    #[command(alias = "c")]
    Copy(CopyArgs),

    /// Scaffold a new package source repository
    #[command(alias = "i")]
    Init(InitArgs),

    /// Clone a package from the official Solus repository
    Clone(CloneArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the clean command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove everything and reindex:\n    solpkg clean\n\n\
                  See what would be removed:\n    solpkg clean --dry-run\n\n\
                  Keep some packages:\n    solpkg clean --keep nano,vim")]
pub struct CleanArgs {
    /// Print what would be removed without removing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Comma-separated package name prefixes to keep
    #[arg(long, value_delimiter = ',')]
    pub keep: Vec<String>,
}

/// Arguments for the copy command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Copy built archives from the current directory:\n    solpkg copy\n\n\
                  Short alias:\n    solpkg c")]
pub struct CopyArgs {}

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Scaffold a package:\n    solpkg init nano https://www.nano-editor.org/dist/v7/nano-7.2.tar.xz\n\n\
                  Without a maintainers file:\n    solpkg init nano <url> --skip-maintainers")]
pub struct InitArgs {
    /// Name of the package
    pub name: String,

    /// URL of the source tarball
    pub url: String,

    /// Do not write a MAINTAINERS.md file
    #[arg(long)]
    pub skip_maintainers: bool,
}

/// Arguments for the clone command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Clone an existing package:\n    solpkg clone nano")]
pub struct CloneArgs {
    /// Name of the package to clone
    pub name: String,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    solpkg completions --shell bash > ~/.bash_completion.d/solpkg\n\n\
                  Generate zsh completions:\n    solpkg completions --shell zsh > ~/.zfunc/_solpkg")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
