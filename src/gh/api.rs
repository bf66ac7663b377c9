//! Typed GitHub Actions requests on top of [`GhApi`].

use crate::gh::executor::GhApi;
use crate::gh::parser;
use crate::model::{Annotation, Job, PullRequest, Run};
use color_eyre::eyre::{eyre, Result};
use std::fmt;
use std::str::FromStr;

const PULL_REQUEST_FOR_RUN: &str = r"
query PullRequestForRun($owner: String!, $repo: String!, $headRefName: String!) {
  repository(owner: $owner, name: $repo) {
    pullRequests(headRefName: $headRefName, first: 1, orderBy: { field: CREATED_AT, direction: DESC }) {
      nodes {
        number
        headRefOid
      }
    }
  }
}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split('/').collect::<Vec<_>>().as_slice() {
            [owner, name]
                if !owner.is_empty() && !name.is_empty() && !s.contains(char::is_whitespace) =>
            {
                Ok(Self {
                    owner: (*owner).to_string(),
                    name: (*name).to_string(),
                })
            }
            _ => Err(format!(
                "Invalid repository '{s}'. Expected 'owner/repo' (e.g. 'cli/cli')."
            )),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

pub async fn list_runs(api: &dyn GhApi, repo: &RepoRef, limit: usize) -> Result<Vec<Run>> {
    let path = format!("repos/{repo}/actions/runs?per_page={limit}");
    let json = api.rest_get(&path).await?;
    let mut runs = parser::parse_runs(&json)?;
    runs.truncate(limit);
    Ok(runs)
}

pub async fn get_run(api: &dyn GhApi, repo: &RepoRef, run_id: u64) -> Result<Run> {
    let json = api
        .rest_get(&format!("repos/{repo}/actions/runs/{run_id}"))
        .await?;
    parser::parse_run(&json).map_err(|e| eyre!("failed to decode run {run_id}: {e}"))
}

pub async fn get_jobs(api: &dyn GhApi, run: &Run) -> Result<Vec<Job>> {
    let json = api.rest_get(&run.jobs_url).await?;
    parser::parse_jobs(&json).map_err(|e| eyre!("failed to decode jobs of run {}: {e}", run.id))
}

/// Annotations live on the check run that backs a job; the two share an ID.
pub async fn get_annotations(
    api: &dyn GhApi,
    repo: &RepoRef,
    job: &Job,
) -> Result<Vec<Annotation>> {
    let json = api
        .rest_get(&format!("repos/{repo}/check-runs/{}/annotations", job.id))
        .await?;
    parser::parse_annotations(&json)
        .map_err(|e| eyre!("failed to decode annotations of job {}: {e}", job.id))
}

/// Best-effort lookup. Any failure is logged and reported as no pull request.
pub async fn pull_request_for_run(
    api: &dyn GhApi,
    repo: &RepoRef,
    run: &Run,
) -> Option<PullRequest> {
    let variables = [
        ("owner", repo.owner.as_str()),
        ("repo", repo.name.as_str()),
        ("headRefName", run.head_branch.as_str()),
    ];
    let result = match api.graphql(PULL_REQUEST_FOR_RUN, &variables).await {
        Ok(json) => parser::parse_pull_request(&json, &run.head_sha),
        Err(e) => Err(e),
    };
    match result {
        Ok(pr) => pr,
        Err(e) => {
            tracing::debug!(run_id = run.id, error = %e, "pull request lookup failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_ref_parses_owner_and_name() {
        let repo: RepoRef = "OWNER/REPO".parse().unwrap();
        assert_eq!(repo.owner, "OWNER");
        assert_eq!(repo.name, "REPO");
        assert_eq!(repo.to_string(), "OWNER/REPO");
    }

    #[test]
    fn repo_ref_rejects_bad_formats() {
        for bad in ["", "noslash", "/repo", "owner/", "a/b/c", "own er/repo"] {
            assert!(bad.parse::<RepoRef>().is_err(), "{bad:?} should be rejected");
        }
    }
}
