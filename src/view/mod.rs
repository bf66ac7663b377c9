//! `view` subcommand: pick a run, fetch its details, print a summary.

pub mod fetch;
pub mod render;
pub mod select;

use crate::cli::ViewArgs;
use crate::gh::api::{self, RepoRef};
use crate::gh::executor::GhApi;
use crate::iostreams::IoStreams;
use crate::model::RUN_LIST_PAGE_SIZE;
use crate::progress::Progress;
use crate::prompt::Prompter;
use chrono::{DateTime, Utc};
use color_eyre::eyre::{eyre, Result};
use std::io::Write;

pub type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct ViewOptions {
    pub run_id: Option<u64>,
    pub prompt: bool,
    pub show_progress: bool,
    pub exit_status: bool,
    pub verbose: bool,
    pub now: Clock,
}

impl ViewOptions {
    /// Resolves parsed flags against the terminal. Without a run ID the user
    /// has to be able to answer a prompt.
    pub fn from_args(args: &ViewArgs, interactive: bool) -> Result<Self> {
        if args.run_id.is_none() && !interactive {
            return Err(eyre!("run ID required when not running interactively"));
        }
        Ok(Self {
            run_id: args.run_id,
            prompt: args.run_id.is_none(),
            show_progress: interactive,
            exit_status: args.exit_status,
            verbose: args.verbose,
            now: Box::new(Utc::now),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOutcome {
    Ok,
    /// Rendered fine, but `--exit-status` asks for a failing exit.
    RunFailed,
}

pub async fn run_view<W: Write>(
    opts: &ViewOptions,
    repo: &RepoRef,
    api: &dyn GhApi,
    prompter: &dyn Prompter,
    io: &mut IoStreams<W>,
) -> Result<ViewOutcome> {
    let cs = io.color_scheme();
    let show_spinner = opts.show_progress && io.is_stderr_tty();
    let spinner = |label: &'static str| show_spinner.then(|| Progress::start(label));

    let run_id = if let Some(id) = opts.run_id {
        id
    } else if opts.prompt {
        let progress = spinner("Fetching runs");
        let runs = api::list_runs(api, repo, RUN_LIST_PAGE_SIZE).await;
        drop(progress);
        let runs = runs?;
        tracing::info!(count = runs.len(), %repo, "listed runs");
        select::select_run(&runs, prompter, (opts.now)(), &cs)?.id
    } else {
        return Err(eyre!("run ID required when not running interactively"));
    };

    let progress = spinner("Fetching run details");
    let details = fetch::fetch_details(api, repo, run_id).await;
    drop(progress);
    let details = details?;

    let render_opts = render::RenderOptions {
        verbose: opts.verbose,
        now: (opts.now)(),
    };
    let text = render::render(&details, &render_opts, &cs);
    io.out.write_all(text.as_bytes())?;
    io.out.flush()?;

    if opts.exit_status && details.run.is_failure() {
        return Ok(ViewOutcome::RunFailed);
    }
    Ok(ViewOutcome::Ok)
}
