use crate::gh::api::{self, RepoRef};
use crate::gh::executor::GhApi;
use crate::model::{Annotation, Job, PullRequest, Run};
use color_eyre::eyre::Result;
use std::collections::HashMap;

/// Everything the summary needs about one run.
#[derive(Debug, Clone)]
pub struct RunDetails {
    pub run: Run,
    pub jobs: Vec<Job>,
    /// Keyed by job ID; only failed jobs have an entry.
    pub annotations: HashMap<u64, Vec<Annotation>>,
    pub pull_request: Option<PullRequest>,
}

impl RunDetails {
    pub fn annotations_for(&self, job: &Job) -> &[Annotation] {
        self.annotations.get(&job.id).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Fetches the run fresh, then its linked PR, jobs and failed-job annotations.
/// Requests go out one at a time.
pub async fn fetch_details(api: &dyn GhApi, repo: &RepoRef, run_id: u64) -> Result<RunDetails> {
    let run = api::get_run(api, repo, run_id).await?;
    tracing::info!(run_id, status = ?run.status, "fetched run");

    let pull_request = api::pull_request_for_run(api, repo, &run).await;

    let jobs = api::get_jobs(api, &run).await?;
    tracing::info!(run_id, count = jobs.len(), "fetched jobs");

    let mut annotations = HashMap::new();
    for job in jobs.iter().filter(|j| j.is_failure()) {
        let found = api::get_annotations(api, repo, job).await?;
        tracing::info!(job_id = job.id, count = found.len(), "fetched annotations");
        annotations.insert(job.id, found);
    }

    Ok(RunDetails {
        run,
        jobs,
        annotations,
        pull_request,
    })
}
