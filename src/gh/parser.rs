use crate::model::{
    Annotation, Conclusion, Job, JobsPayload, PullRequest, Run, RunStatus, RunsPayload,
};
use color_eyre::eyre::{eyre, Result};

fn check_conclusion(
    kind: &str,
    id: u64,
    status: RunStatus,
    conclusion: Option<Conclusion>,
) -> Result<()> {
    if status == RunStatus::Completed && conclusion.is_none() {
        return Err(eyre!("{kind} {id} is completed but has no conclusion"));
    }
    Ok(())
}

fn check_run(run: &Run) -> Result<()> {
    check_conclusion("run", run.id, run.status, run.conclusion)
}

pub fn parse_runs(json: &str) -> Result<Vec<Run>> {
    let payload: RunsPayload = serde_json::from_str(json)?;
    for run in &payload.workflow_runs {
        check_run(run)?;
    }
    Ok(payload.workflow_runs)
}

pub fn parse_run(json: &str) -> Result<Run> {
    let run: Run = serde_json::from_str(json)?;
    check_run(&run)?;
    Ok(run)
}

pub fn parse_jobs(json: &str) -> Result<Vec<Job>> {
    let payload: JobsPayload = serde_json::from_str(json)?;
    for job in &payload.jobs {
        check_conclusion("job", job.id, job.status, job.conclusion)?;
        for step in &job.steps {
            check_conclusion("step", step.number, step.status, step.conclusion)?;
        }
    }
    Ok(payload.jobs)
}

pub fn parse_annotations(json: &str) -> Result<Vec<Annotation>> {
    let annotations: Vec<Annotation> = serde_json::from_str(json)?;
    Ok(annotations)
}

#[derive(serde::Deserialize)]
struct PrResponse {
    data: PrData,
}

#[derive(serde::Deserialize)]
struct PrData {
    repository: PrRepository,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct PrRepository {
    pull_requests: PrConnection,
}

#[derive(serde::Deserialize)]
struct PrConnection {
    nodes: Vec<PrNode>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct PrNode {
    number: u64,
    head_ref_oid: String,
}

/// Picks the pull request whose head commit is the one the run built.
/// A newer push to the same branch means the run no longer belongs to it.
pub fn parse_pull_request(json: &str, head_sha: &str) -> Result<Option<PullRequest>> {
    let resp: PrResponse = serde_json::from_str(json)?;
    Ok(resp
        .data
        .repository
        .pull_requests
        .nodes
        .into_iter()
        .next()
        .filter(|pr| pr.head_ref_oid == head_sha)
        .map(|pr| PullRequest { number: pr.number }))
}
