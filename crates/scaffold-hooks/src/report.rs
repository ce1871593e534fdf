//! What the hook did, and how it is shown on the console

use colored::Colorize;
use std::path::PathBuf;

/// A file-system change made by the hook (paths relative to the project root)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Removed { path: PathBuf, files: usize },
    Wrote { path: PathBuf },
    /// README requested but one already existed, left untouched
    KeptReadme { path: PathBuf },
}

/// Outcome of the git bootstrap step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitStatus {
    Skipped,
    Initialized { configured: Vec<&'static str> },
    NotFound { program: String },
    Failed { detail: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookReport {
    pub actions: Vec<Action>,
    pub git: GitStatus,
    /// Test framework of the kept tests directory, if any
    pub test_framework: Option<String>,
}

impl Default for HookReport {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
            git: GitStatus::Skipped,
            test_framework: None,
        }
    }
}

impl HookReport {
    /// Paths removed by the hook
    pub fn removed(&self) -> Vec<&PathBuf> {
        self.actions
            .iter()
            .filter_map(|action| match action {
                Action::Removed { path, .. } => Some(path),
                _ => None,
            })
            .collect()
    }

    /// Paths written by the hook
    pub fn written(&self) -> Vec<&PathBuf> {
        self.actions
            .iter()
            .filter_map(|action| match action {
                Action::Wrote { path } => Some(path),
                _ => None,
            })
            .collect()
    }

    /// Print git diagnostics, and every action when `verbose` is set
    pub fn print(&self, verbose: bool) {
        if verbose {
            for action in &self.actions {
                match action {
                    Action::Removed { path, files } => println!(
                        "  {} {} {}",
                        "-".red(),
                        path.display(),
                        format!("({} files)", files).dimmed()
                    ),
                    Action::Wrote { path } => println!("  {} {}", "+".green(), path.display()),
                    Action::KeptReadme { path } => println!(
                        "  {} {} {}",
                        "=".blue(),
                        path.display(),
                        "(already present)".dimmed()
                    ),
                }
            }
            if let Some(framework) = &self.test_framework {
                println!("  {} tests use {}", "->".blue(), framework);
            }
        }

        match &self.git {
            GitStatus::Skipped => {}
            GitStatus::Initialized { configured } => {
                if verbose {
                    println!("  {} initialized git repository", "->".blue());
                    for key in configured {
                        println!("  {} set local {}", "->".blue(), key);
                    }
                }
            }
            GitStatus::NotFound { program } => {
                println!("{}", format!("{} not found; skipping git init", program).yellow());
            }
            GitStatus::Failed { detail } => {
                println!("{} {}", "git command failed:".red(), detail);
            }
        }
    }
}
