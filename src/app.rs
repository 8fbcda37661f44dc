use crate::config::{resolve_repo_path, Config};
use crate::git::{self, GitRunner, SystemGit};
use crate::types::Summary;
use crate::ui;
use anyhow::{Context, Result};
use std::io::Write;

pub fn run(config: &Config, out: &mut impl Write) -> Result<Summary> {
    let runner = SystemGit::new(config.git.clone());
    run_with(&runner, config, out)
}

pub fn run_with(runner: &dyn GitRunner, config: &Config, out: &mut impl Write) -> Result<Summary> {
    let repo_path = resolve_repo_path(config.path.as_deref())?;
    let summary = git::get_status(runner, &repo_path)?;

    let lines = ui::render(&summary, &repo_path.display().to_string());
    ui::write_report(out, &lines, config.color).context("Failed to write report")?;

    Ok(summary)
}
