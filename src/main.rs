use clap::Parser;
use git_tally::app;
use git_tally::config::{color_enabled, Config};
use git_tally::TallyError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "git-tally")]
#[command(version)]
#[command(about = "Summarize the pending changes of a git working tree")]
struct Cli {
    /// Path to the repository working tree
    path: Option<PathBuf>,

    /// Git executable to run
    #[arg(long, value_name = "BIN", default_value = "git")]
    git: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("git_tally={}", level))),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let color = color_enabled(cli.no_color);

    let config = Config {
        path: cli.path,
        git: cli.git,
        color,
    };

    match app::run(&config, &mut std::io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            let code = match err.downcast_ref::<TallyError>() {
                Some(tally) => tally.exit_code(),
                None => 1,
            };
            eprintln!("error: {:#}", err);
            ExitCode::from(code)
        }
    }
}
