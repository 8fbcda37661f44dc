use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TallyError {
    #[error("no repository path given\n\nUsage: git-tally <PATH>")]
    Usage,

    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("{message}{}", with_stderr(.stderr))]
    ToolInvocation { message: String, stderr: String },

    #[error("{message}\n{} is not a git repository", .path.display())]
    NotARepository { path: PathBuf, message: String },

    #[error("git reported an error:\n{}", .0.trim_end())]
    ToolStderr(String),
}

fn with_stderr(stderr: &str) -> String {
    let stderr = stderr.trim_end();
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr)
    }
}

impl TallyError {
    pub fn exit_code(&self) -> u8 {
        match self {
            TallyError::Usage | TallyError::PathNotFound(_) => 1,
            TallyError::ToolInvocation { .. }
            | TallyError::NotARepository { .. }
            | TallyError::ToolStderr(_) => 2,
        }
    }
}
