//! CLI command implementations.

pub mod explain;
pub mod init;
pub mod outcome;
pub mod roadmap;
