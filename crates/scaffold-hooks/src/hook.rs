//! Post-generation hook orchestration

use crate::config::HookConfig;
use crate::fs::{remove_path, write_text};
use crate::layout::{OptionalDir, ProjectLayout};
use crate::license::{current_year, License};
use crate::report::{Action, GitStatus, HookReport};
use crate::runtime::{Git, GitError};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Apply `config` to the generated project at `root`.
///
/// File-system failures abort with an error. Git problems never do: they
/// end up in [`HookReport::git`].
pub fn run(config: &HookConfig, root: &Path, git: &Git) -> Result<HookReport> {
    let layout = ProjectLayout::new(root);
    let mut report = HookReport::default();

    // Step 1: Prune optional directories the user opted out of
    for dir in OptionalDir::ALL {
        if !dir.enabled(config) {
            remove(&layout, &mut report, layout.optional_dir(dir))?;
        }
    }
    if config.use_tests && !config.test_framework.trim().is_empty() {
        report.test_framework = Some(config.test_framework.clone());
    }

    // Step 2: Packaging files only matter with package init
    if !config.use_package_init {
        remove(&layout, &mut report, layout.package_config_dir())?;
    }

    // Step 3: README for users
    apply_readme(config, &layout, &mut report)?;

    // Step 4: License
    apply_license(config, &layout, &mut report)?;

    // Step 5: Git repository
    if config.init_git {
        report.git = match git.bootstrap(
            root,
            &config.author_name,
            &config.author_email,
            config.git_config_local,
        ) {
            Ok(configured) => GitStatus::Initialized { configured },
            Err(GitError::NotFound { program }) => GitStatus::NotFound { program },
            Err(GitError::Failed { detail }) => GitStatus::Failed { detail },
        };
    }

    Ok(report)
}

fn remove(layout: &ProjectLayout, report: &mut HookReport, path: PathBuf) -> Result<()> {
    if let Some(files) = remove_path(&path)? {
        report.actions.push(Action::Removed {
            path: layout.relative(&path).to_path_buf(),
            files,
        });
    }
    Ok(())
}

fn write(
    layout: &ProjectLayout,
    report: &mut HookReport,
    path: PathBuf,
    text: &str,
) -> Result<()> {
    write_text(&path, text)?;
    report.actions.push(Action::Wrote {
        path: layout.relative(&path).to_path_buf(),
    });
    Ok(())
}

fn apply_readme(
    config: &HookConfig,
    layout: &ProjectLayout,
    report: &mut HookReport,
) -> Result<()> {
    let readme = layout.readme();

    if !config.add_readme_for_users {
        return remove(layout, report, readme);
    }

    // Never clobber a README the template (or a previous run) produced
    if readme.exists() {
        report.actions.push(Action::KeptReadme {
            path: layout.relative(&readme).to_path_buf(),
        });
        return Ok(());
    }
    write(layout, report, readme, "")
}

fn apply_license(
    config: &HookConfig,
    layout: &ProjectLayout,
    report: &mut HookReport,
) -> Result<()> {
    if config.license == License::None {
        remove(layout, report, layout.license())?;
        return remove(layout, report, layout.documents_license());
    }

    let rendered = config
        .license
        .render(&config.author_name, &config.author_email, current_year());
    let text = rendered.trim_end();
    if text.is_empty() {
        return Ok(());
    }

    let text = format!("{}\n", text);
    write(layout, report, layout.license(), &text)?;
    if config.use_documents {
        write(layout, report, layout.documents_license(), &text)?;
    }
    Ok(())
}
