//! Git repository bootstrap for generated projects

use super::command::{run_command, CommandOutcome};
use std::path::Path;
use thiserror::Error;

/// Why the git bootstrap stopped early
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GitError {
    #[error("{program} not found")]
    NotFound { program: String },

    #[error("{detail}")]
    Failed { detail: String },
}

/// Git executable wrapper
#[derive(Debug, Clone)]
pub struct Git {
    program: String,
}

impl Default for Git {
    fn default() -> Self {
        Self::new("git")
    }
}

impl Git {
    /// Use a specific executable name or path instead of `git`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, args: &[&str], root: &Path) -> Result<(), GitError> {
        match run_command(&self.program, args, root) {
            CommandOutcome::Success => Ok(()),
            CommandOutcome::NotFound => Err(GitError::NotFound {
                program: self.program.clone(),
            }),
            CommandOutcome::Failed(detail) => Err(GitError::Failed { detail }),
        }
    }

    /// `git init` in the project root
    pub fn init(&self, root: &Path) -> Result<(), GitError> {
        self.run(&["init"], root)
    }

    /// `git config --local <key> <value>`
    pub fn config_local(&self, root: &Path, key: &str, value: &str) -> Result<(), GitError> {
        self.run(&["config", "--local", key, value], root)
    }

    /// Initialize a repository and optionally set the local identity.
    ///
    /// Identity keys are only written for non-blank values. Returns the keys
    /// that were set.
    pub fn bootstrap(
        &self,
        root: &Path,
        author: &str,
        email: &str,
        configure_local: bool,
    ) -> Result<Vec<&'static str>, GitError> {
        self.init(root)?;

        let mut configured = Vec::new();
        if !configure_local {
            return Ok(configured);
        }

        for (key, value) in [("user.name", author), ("user.email", email)] {
            if !value.trim().is_empty() {
                self.config_local(root, key, value)?;
                configured.push(key);
            }
        }

        Ok(configured)
    }
}
