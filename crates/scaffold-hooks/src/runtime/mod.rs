//! External tool execution
//!
//! This module provides:
//! - A synchronous command runner that reports missing executables separately
//! - Git repository bootstrap built on top of it

pub mod command;
pub mod git;

pub use command::{run_command, CommandOutcome};
pub use git::{Git, GitError};
