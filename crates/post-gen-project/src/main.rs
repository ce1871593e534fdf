//! post-gen-project - finishes a freshly rendered project template

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser};
use colored::Colorize;
use scaffold_hooks::{hook, Git, HookConfig, RawContext};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "post-gen-project")]
#[command(about = "Prune, license, and initialize a freshly generated project")]
#[command(version)]
pub struct Args {
    /// Generated project root (defaults to the current directory)
    #[arg(long = "project-dir", env = "POST_GEN_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// YAML or JSON file with rendered answers (flags and env vars take precedence)
    #[arg(long, env = "POST_GEN_CONTEXT")]
    pub context: Option<PathBuf>,

    /// Git executable to use for repository bootstrap
    #[arg(long, env = "POST_GEN_GIT", default_value = "git")]
    pub git: String,

    /// Print every change made to the project
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    pub answers: AnswerArgs,
}

/// Rendered template answers, passed through verbatim
#[derive(ClapArgs, Debug, Default)]
pub struct AnswerArgs {
    /// Keep the tests/ directory (y/yes/true/1/on)
    #[arg(long = "use-tests", env = "POST_GEN_USE_TESTS", value_name = "BOOL")]
    pub use_tests: Option<String>,

    /// Test framework the tests/ directory was rendered for
    #[arg(long = "test-framework", env = "POST_GEN_TEST_FRAMEWORK")]
    pub test_framework: Option<String>,

    /// Keep the subtree/ directory
    #[arg(long = "use-subtree", env = "POST_GEN_USE_SUBTREE", value_name = "BOOL")]
    pub use_subtree: Option<String>,

    /// Keep the assets/ directory
    #[arg(long = "use-assets", env = "POST_GEN_USE_ASSETS", value_name = "BOOL")]
    pub use_assets: Option<String>,

    /// Keep the documents/ directory
    #[arg(long = "use-documents", env = "POST_GEN_USE_DOCUMENTS", value_name = "BOOL")]
    pub use_documents: Option<String>,

    /// Create an empty README.md for users
    #[arg(
        long = "add-readme-for-users",
        env = "POST_GEN_ADD_README_FOR_USERS",
        value_name = "BOOL"
    )]
    pub add_readme_for_users: Option<String>,

    /// License to write: MIT, Apache-2.0, BSD-3-Clause, Proprietary, or none
    #[arg(long, env = "POST_GEN_LICENSE")]
    pub license: Option<String>,

    /// Keep the cmake/ packaging directory
    #[arg(
        long = "use-package-init",
        env = "POST_GEN_USE_PACKAGE_INIT",
        value_name = "BOOL"
    )]
    pub use_package_init: Option<String>,

    /// Initialize a git repository
    #[arg(long = "init-git", env = "POST_GEN_INIT_GIT", value_name = "BOOL")]
    pub init_git: Option<String>,

    /// Set the repository-local git identity from the author answers
    #[arg(
        long = "git-config-local",
        env = "POST_GEN_GIT_CONFIG_LOCAL",
        value_name = "BOOL"
    )]
    pub git_config_local: Option<String>,

    /// Author display name
    #[arg(long = "author-name", env = "POST_GEN_AUTHOR_NAME")]
    pub author_name: Option<String>,

    /// Author email
    #[arg(long = "author-email", env = "POST_GEN_AUTHOR_EMAIL")]
    pub author_email: Option<String>,
}

impl From<AnswerArgs> for RawContext {
    fn from(args: AnswerArgs) -> Self {
        RawContext {
            use_tests: args.use_tests,
            test_framework: args.test_framework,
            use_subtree: args.use_subtree,
            use_assets: args.use_assets,
            use_documents: args.use_documents,
            add_readme_for_users: args.add_readme_for_users,
            license: args.license,
            use_package_init: args.use_package_init,
            init_git: args.init_git,
            git_config_local: args.git_config_local,
            author_name: args.author_name,
            author_email: args.author_email,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let root = match args.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    if !root.is_dir() {
        anyhow::bail!("Project directory not found: {}", root.display());
    }

    // Command line and environment override the context file
    let file_context = match &args.context {
        Some(path) => RawContext::from_file(path)?,
        None => RawContext::default(),
    };
    let config = HookConfig::from_raw(&RawContext::from(args.answers).overlay(file_context));

    let report = hook::run(&config, &root, &Git::new(args.git))?;
    report.print(args.verbose);

    println!("{}", "Project generation complete.".green());
    Ok(())
}
