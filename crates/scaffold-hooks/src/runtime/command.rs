//! Synchronous external command runner

use std::fmt;
use std::path::Path;
use std::process::Command;

/// Result of running an external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    /// The executable could not be located on PATH
    NotFound,
    /// The command could not be started or exited non-zero
    Failed(String),
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success)
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::Success => f.write_str("success"),
            CommandOutcome::NotFound => f.write_str("executable not found"),
            CommandOutcome::Failed(detail) => f.write_str(detail),
        }
    }
}

/// Run `program args...` in `cwd` and wait for it.
///
/// Output streams are inherited from the hook; there is no timeout.
pub fn run_command(program: &str, args: &[&str], cwd: &Path) -> CommandOutcome {
    let executable = match which::which(program) {
        Ok(path) => path,
        Err(_) => return CommandOutcome::NotFound,
    };

    let command_line = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");

    match Command::new(executable).args(args).current_dir(cwd).status() {
        Ok(status) if status.success() => CommandOutcome::Success,
        Ok(status) => CommandOutcome::Failed(match status.code() {
            Some(code) => format!("'{}' returned non-zero exit status {}", command_line, code),
            None => format!("'{}' was terminated by a signal", command_line),
        }),
        Err(e) => CommandOutcome::Failed(format!("'{}' could not be started: {}", command_line, e)),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_executable_is_not_found() {
        let dir = TempDir::new().unwrap();
        let outcome = run_command("definitely-not-installed-7f3a9c", &["init"], dir.path());
        assert_eq!(outcome, CommandOutcome::NotFound);
    }

    #[test]
    fn test_successful_command() {
        let dir = TempDir::new().unwrap();
        let outcome = run_command("sh", &["-c", "touch marker"], dir.path());

        assert!(outcome.is_success());
        assert!(dir.path().join("marker").exists());
    }

    #[test]
    fn test_non_zero_exit_is_failure_with_detail() {
        let dir = TempDir::new().unwrap();
        let outcome = run_command("sh", &["-c", "exit 3"], dir.path());

        match outcome {
            CommandOutcome::Failed(detail) => {
                assert!(detail.contains("sh -c exit 3"));
                assert!(detail.contains("exit status 3"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
