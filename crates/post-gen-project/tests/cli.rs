//! End-to-end runs of the post-gen-project binary against generated trees

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn generated_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    for sub in ["tests", "subtree", "assets", "documents", "cmake", "src"] {
        std::fs::create_dir_all(root.join(sub)).unwrap();
    }
    std::fs::write(root.join("tests/test_main.cpp"), "int main() {}").unwrap();
    std::fs::write(root.join("assets/icon.svg"), "<svg/>").unwrap();
    std::fs::write(root.join("cmake/Config.cmake.in"), "@PACKAGE_INIT@").unwrap();
    std::fs::write(root.join("LICENSE.txt"), "placeholder").unwrap();
    std::fs::write(root.join("documents/LICENSE.txt"), "placeholder").unwrap();
    dir
}

/// Run the hook with a clean environment so no POST_GEN_* variables leak in
fn run_hook(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_post-gen-project"))
        .env_clear()
        .env("NO_COLOR", "1")
        .arg("--project-dir")
        .arg(root)
        .args(args)
        .output()
        .expect("failed to run post-gen-project")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_prunes_and_writes_license() {
    let project = generated_project();
    let root = project.path();

    let output = run_hook(
        root,
        &[
            "--use-tests",
            "false",
            "--use-assets",
            "yes",
            "--use-subtree",
            "y",
            "--use-documents",
            "true",
            "--use-package-init",
            "no",
            "--license",
            "Apache-2.0",
            "--author-name",
            "Jane Doe",
            "--author-email",
            "jane@example.com",
        ],
    );

    assert!(output.status.success());
    assert!(stdout(&output).contains("Project generation complete."));
    assert!(!root.join("tests").exists());
    assert!(!root.join("cmake").exists());
    assert!(root.join("assets/icon.svg").exists());
    assert!(root.join("subtree").exists());

    let top = std::fs::read_to_string(root.join("LICENSE.txt")).unwrap();
    let nested = std::fs::read_to_string(root.join("documents/LICENSE.txt")).unwrap();
    assert_eq!(top, nested);
    assert!(top.contains("Jane Doe <jane@example.com>"));
    assert!(top.ends_with(".\n") && !top.ends_with("\n\n"));
}

#[test]
fn test_license_none_removes_existing_files() {
    let project = generated_project();
    let root = project.path();

    let output = run_hook(root, &["--license", "none", "--use-documents", "no"]);

    assert!(output.status.success());
    assert!(!root.join("LICENSE.txt").exists());
    assert!(!root.join("documents").exists());
}

#[test]
fn test_missing_git_still_succeeds() {
    let project = generated_project();
    let root = project.path();

    // env_clear leaves no PATH, so git cannot be located
    let output = run_hook(
        root,
        &[
            "--use-tests",
            "yes",
            "--license",
            "MIT",
            "--init-git",
            "yes",
            "--git-config-local",
            "yes",
            "--author-name",
            "Jane Doe",
        ],
    );

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("git not found; skipping git init"));
    assert!(out.contains("Project generation complete."));
    assert!(!root.join(".git").exists());
    assert!(root.join("LICENSE.txt").exists());
}

#[test]
fn test_context_file_with_flag_override() {
    let project = generated_project();
    let root = project.path();
    let context_dir = TempDir::new().unwrap();
    let context = context_dir.path().join("replay.json");
    std::fs::write(
        &context,
        r#"{"cookiecutter": {"use_tests": "n", "use_assets": "n", "use_documents": "y",
            "use_subtree": "y", "use_package_init": "y", "license": "MIT",
            "add_readme_for_users": "y", "author_name": "Jane Doe"}}"#,
    )
    .unwrap();

    let output = run_hook(
        root,
        &[
            "--context",
            context.to_str().unwrap(),
            "--use-assets",
            "on",
            "--verbose",
        ],
    );

    assert!(output.status.success());
    assert!(!root.join("tests").exists());
    assert!(root.join("assets").exists());
    assert!(root.join("cmake").exists());
    assert_eq!(std::fs::read_to_string(root.join("README.md")).unwrap(), "");
    assert!(std::fs::read_to_string(root.join("LICENSE.txt"))
        .unwrap()
        .starts_with("MIT License\n"));
    assert!(stdout(&output).contains("README.md"));
}

#[test]
fn test_unreadable_context_is_fatal() {
    let project = generated_project();
    let root = project.path();

    let output = run_hook(root, &["--context", "/nonexistent/replay.yaml"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("replay.yaml"));
    assert!(root.join("tests").exists());
}

#[test]
fn test_missing_project_dir_is_fatal() {
    let project = generated_project();
    let missing = project.path().join("not-generated");

    let output = run_hook(&missing, &["--use-tests", "no"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Project directory not found"));
}
