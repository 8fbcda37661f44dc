use crate::error::TallyError;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub path: Option<PathBuf>,
    pub git: String,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            git: "git".to_string(),
            color: false,
        }
    }
}

pub fn color_enabled(no_color: bool) -> bool {
    if no_color {
        colored::control::set_override(false);
        return false;
    }
    colored::control::SHOULD_COLORIZE.should_colorize()
}

pub fn resolve_repo_path(path: Option<&Path>) -> Result<PathBuf, TallyError> {
    let path = match path {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Err(TallyError::Usage),
    };

    let resolved = absolutize(path, std::env::current_dir())?;
    tracing::debug!(input = %path.display(), resolved = %resolved.display(), "resolved repository path");

    if !resolved.exists() {
        return Err(TallyError::PathNotFound(resolved));
    }
    Ok(resolved)
}

fn absolutize(path: &Path, cwd: io::Result<PathBuf>) -> Result<PathBuf, TallyError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match cwd {
            Ok(cwd) => cwd.join(path),
            Err(err) => {
                tracing::debug!(input = %path.display(), error = %err, "cannot resolve relative path");
                return Err(TallyError::PathNotFound(path.to_path_buf()));
            }
        }
    };
    Ok(absolute.components().collect())
}
