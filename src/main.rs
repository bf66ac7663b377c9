use ghrv::cli::{Cli, Command};
use ghrv::gh::api::RepoRef;
use ghrv::gh::executor::GhExecutor;
use ghrv::iostreams::IoStreams;
use ghrv::prompt::TerminalPrompter;
use ghrv::view::{self, ViewOptions, ViewOutcome};

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use std::process::ExitCode;

fn setup_debug_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    tracing::info!("ghrv v{} starting with debug logging", env!("CARGO_PKG_VERSION"));
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = Cli::parse();

    if args.debug {
        setup_debug_logging();
    }

    let mut io = IoStreams::system();
    let executor = GhExecutor;

    match args.command {
        Command::View(view_args) => {
            // Flag errors come before any gh call.
            let opts = ViewOptions::from_args(&view_args, io.can_prompt())?;
            executor.check_available().await?;
            let repo = match args.repo {
                Some(r) => r,
                None => executor
                    .detect_repo()
                    .await?
                    .parse::<RepoRef>()
                    .map_err(|e| eyre!(e))?,
            };

            match view::run_view(&opts, &repo, &executor, &TerminalPrompter, &mut io).await? {
                ViewOutcome::Ok => Ok(ExitCode::SUCCESS),
                ViewOutcome::RunFailed => Ok(ExitCode::FAILURE),
            }
        }
    }
}
