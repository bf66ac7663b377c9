use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

pub const RUN_LIST_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    Requested,
    Waiting,
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conclusion {
    Success,
    Failure,
    Cancelled,
    TimedOut,
    Skipped,
    Neutral,
    Stale,
    ActionRequired,
    StartupFailure,
}

impl Conclusion {
    /// Conclusions that make `--exit-status` fail the process.
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            Conclusion::Failure
                | Conclusion::TimedOut
                | Conclusion::StartupFailure
                | Conclusion::ActionRequired
        )
    }
}

/// GitHub sends `null` for some optional strings and objects; treat it like
/// an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct Commit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Run {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: RunStatus,
    pub conclusion: Option<Conclusion>,
    pub event: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub head_branch: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub head_commit: Commit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub head_sha: String,
    pub jobs_url: String,
    #[serde(rename = "html_url")]
    pub url: String,
}

impl Run {
    pub fn is_completed(&self) -> bool {
        self.status == RunStatus::Completed
    }

    /// `None` while the run is still going, whatever the payload carried.
    pub fn final_conclusion(&self) -> Option<Conclusion> {
        if self.is_completed() {
            self.conclusion
        } else {
            None
        }
    }

    pub fn is_failure(&self) -> bool {
        self.final_conclusion().is_some_and(Conclusion::is_failure)
    }

    /// Workflow name, falling back to the triggering event.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.event
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Step {
    pub name: String,
    pub status: RunStatus,
    pub conclusion: Option<Conclusion>,
    pub number: u64,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Job {
    pub id: u64,
    pub name: String,
    pub status: RunStatus,
    pub conclusion: Option<Conclusion>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Job {
    pub fn is_failure(&self) -> bool {
        self.status == RunStatus::Completed && self.conclusion.is_some_and(Conclusion::is_failure)
    }

    pub fn elapsed(&self) -> Option<chrono::Duration> {
        Some(self.completed_at? - self.started_at?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationLevel {
    Notice,
    Warning,
    Failure,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "annotation_level")]
    pub level: AnnotationLevel,
    pub start_line: Option<u64>,
    #[serde(default)]
    pub start_column: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
}

#[derive(serde::Deserialize)]
pub struct RunsPayload {
    pub workflow_runs: Vec<Run>,
}

#[derive(serde::Deserialize)]
pub struct JobsPayload {
    pub jobs: Vec<Job>,
}
