//! Scaffold Hooks - post-generation operations for scaffolded projects
//!
//! After the scaffolding tool renders a project template, the generated tree
//! still contains every optional directory the template knows about. This
//! library turns the rendered answers into a finished project: it prunes the
//! directories the user opted out of, writes the chosen license, handles the
//! user-facing README, and optionally bootstraps a git repository.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Boolean coercion, path removal, text writing,
//!   license rendering, external command execution
//! - **Layer 2: Workflow Orchestration** - [`hook::run`] applies a typed
//!   [`HookConfig`] to a project root and returns a [`HookReport`]
//! - **Layer 3: Console Output** - [`HookReport::print`] renders the outcome
//!
//! # Example Usage
//!
//! ```ignore
//! use scaffold_hooks::{config::RawContext, hook, runtime::Git, HookConfig};
//!
//! let raw = RawContext::from_file("cookiecutter.json".as_ref())?;
//! let config = HookConfig::from_raw(&raw);
//! let report = hook::run(&config, Path::new("."), &Git::default())?;
//! report.print(false);
//! ```

pub mod config;
pub mod fs;
pub mod hook;
pub mod layout;
pub mod license;
pub mod report;
pub mod runtime;

// Re-export main types for convenience
pub use config::{is_yes, HookConfig, RawContext};
pub use layout::{OptionalDir, ProjectLayout};
pub use license::{render_license, License};
pub use report::{Action, GitStatus, HookReport};
pub use runtime::{run_command, CommandOutcome, Git, GitError};
