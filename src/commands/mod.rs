//! Command implementations for the solpkg CLI

pub mod clean;
pub mod clone;
pub mod completions;
pub mod copy;
pub mod init;
pub mod version;
