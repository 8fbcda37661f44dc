use crate::error::TallyError;
use crate::parser::parse_porcelain;
use crate::types::Summary;
use std::path::Path;
use std::process::Command;

const STATUS_ARGS: [&str; 2] = ["status", "--porcelain"];
const NOT_A_REPOSITORY: &str = "not a git repository";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub exit_error: Option<String>,
    pub stdout: String,
    pub stderr: String,
}

pub trait GitRunner {
    fn status_porcelain(&self, dir: &Path) -> GitOutput;
}

#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
}

impl SystemGit {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitRunner for SystemGit {
    fn status_porcelain(&self, dir: &Path) -> GitOutput {
        tracing::debug!(program = %self.program, dir = %dir.display(), "running git status");

        let output = match Command::new(&self.program)
            .args(STATUS_ARGS)
            .current_dir(dir)
            .output()
        {
            Ok(output) => output,
            Err(err) => {
                return GitOutput {
                    exit_error: Some(format!("failed to run {}: {}", self.program, err)),
                    ..GitOutput::default()
                };
            }
        };

        tracing::debug!(status = %output.status, "git status finished");

        let exit_error = if output.status.success() {
            None
        } else {
            Some(match output.status.code() {
                Some(code) => format!("git status exited with status {}", code),
                None => "git status was terminated by a signal".to_string(),
            })
        };

        GitOutput {
            exit_error,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

pub fn get_status(runner: &dyn GitRunner, dir: &Path) -> Result<Summary, TallyError> {
    let output = runner.status_porcelain(dir);

    if let Some(message) = output.exit_error {
        if output.stderr.contains(NOT_A_REPOSITORY) {
            return Err(TallyError::NotARepository {
                path: dir.to_path_buf(),
                message,
            });
        }
        return Err(TallyError::ToolInvocation {
            message,
            stderr: output.stderr,
        });
    }

    if !output.stderr.is_empty() {
        return Err(TallyError::ToolStderr(output.stderr));
    }

    let summary = parse_porcelain(&output.stdout);
    tracing::info!(
        total = summary.total,
        modified = summary.modified,
        added = summary.added,
        deleted = summary.deleted,
        renamed = summary.renamed,
        untracked = summary.untracked,
        "parsed git status"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeGit(GitOutput);

    impl GitRunner for FakeGit {
        fn status_porcelain(&self, _dir: &Path) -> GitOutput {
            self.0.clone()
        }
    }

    fn run(output: GitOutput) -> Result<Summary, TallyError> {
        get_status(&FakeGit(output), Path::new("/work/repo"))
    }

    #[test]
    fn successful_run_is_parsed() {
        let summary = run(GitOutput {
            stdout: " M a.rs\n?? b.rs\n".into(),
            ..GitOutput::default()
        })
        .unwrap();

        assert_eq!(summary.modified, 1);
        assert_eq!(summary.untracked, 1);
        assert_eq!(summary.total, 2);
    }

    #[test]
    fn not_a_repository_is_detected_from_stderr() {
        let err = run(GitOutput {
            exit_error: Some("git status exited with status 128".into()),
            stderr: "fatal: not a git repository (or any of the parent directories): .git\n"
                .into(),
            ..GitOutput::default()
        })
        .unwrap_err();

        match err {
            TallyError::NotARepository { path, message } => {
                assert_eq!(path, Path::new("/work/repo"));
                assert_eq!(message, "git status exited with status 128");
            }
            other => panic!("Expected NotARepository, got {other:?}"),
        }
    }

    #[test]
    fn other_failures_are_invocation_errors() {
        let err = run(GitOutput {
            exit_error: Some("failed to run git: No such file or directory".into()),
            ..GitOutput::default()
        })
        .unwrap_err();

        assert!(matches!(err, TallyError::ToolInvocation { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn stderr_without_exit_error_aborts() {
        let err = run(GitOutput {
            stdout: "M  a.rs\n".into(),
            stderr: "warning: could not open directory 'x/'\n".into(),
            ..GitOutput::default()
        })
        .unwrap_err();

        match err {
            TallyError::ToolStderr(text) => assert!(text.contains("could not open")),
            other => panic!("Expected ToolStderr, got {other:?}"),
        }
    }

    #[test]
    fn missing_program_reports_exit_error() {
        let git = SystemGit::new("git-tally-no-such-binary");
        let output = git.status_porcelain(Path::new("."));

        assert!(output.exit_error.is_some());
        assert!(output.stdout.is_empty());
    }
}
