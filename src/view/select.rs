use crate::iostreams::ColorScheme;
use crate::model::Run;
use crate::prompt::Prompter;
use crate::status::Outcome;
use crate::text::{fuzzy_ago, truncate};
use chrono::{DateTime, Utc};
use color_eyre::eyre::{eyre, Result};

const LABEL_NAME_WIDTH: usize = 40;

pub fn run_label(run: &Run, now: DateTime<Utc>, cs: &ColorScheme) -> String {
    let outcome = Outcome::classify(run.status, run.final_conclusion());
    format!(
        "{} {} {}, {} (ID {})",
        cs.symbol(outcome),
        run.head_branch,
        truncate(run.display_name(), LABEL_NAME_WIDTH, cs.ellipsis()),
        fuzzy_ago(now - run.created_at),
        run.id
    )
}

/// Lets the user choose among `runs`, most recent first.
pub fn select_run<'a>(
    runs: &'a [Run],
    prompter: &dyn Prompter,
    now: DateTime<Utc>,
    cs: &ColorScheme,
) -> Result<&'a Run> {
    if runs.is_empty() {
        return Err(eyre!("found no runs to view"));
    }
    let labels: Vec<String> = runs.iter().map(|r| run_label(r, now, cs)).collect();
    let idx = prompter.select("Select a workflow run", &labels)?;
    runs.get(idx)
        .ok_or_else(|| eyre!("selection {idx} is out of range for {} runs", runs.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Commit, Conclusion, RunStatus};

    fn run(name: &str, status: RunStatus, conclusion: Option<Conclusion>) -> Run {
        let created: DateTime<Utc> = "2021-02-23T04:51:00Z".parse().unwrap();
        Run {
            id: 7,
            name: name.to_string(),
            created_at: created,
            updated_at: created,
            status,
            conclusion,
            event: "pull_request".to_string(),
            head_branch: "feature".to_string(),
            head_commit: Commit::default(),
            head_sha: String::new(),
            jobs_url: String::new(),
            url: String::new(),
        }
    }

    fn now() -> DateTime<Utc> {
        "2021-02-23T07:00:00Z".parse().unwrap()
    }

    #[test]
    fn label_falls_back_to_event_name() {
        let cs = ColorScheme::new(false, true);
        let r = run("", RunStatus::Completed, Some(Conclusion::Success));
        assert_eq!(
            run_label(&r, now(), &cs),
            "✓ feature pull_request, about 2 hours ago (ID 7)"
        );
    }

    #[test]
    fn label_truncates_long_names() {
        let cs = ColorScheme::new(false, false);
        let r = run(&"x".repeat(80), RunStatus::Waiting, None);
        let label = run_label(&r, now(), &cs);
        assert_eq!(
            label,
            format!(". feature {}..., about 2 hours ago (ID 7)", "x".repeat(37))
        );
        assert!(label.is_ascii());
    }

    struct Unreachable;

    impl Prompter for Unreachable {
        fn select(&self, _message: &str, _options: &[String]) -> Result<usize> {
            panic!("prompt must not be shown");
        }
    }

    #[test]
    fn empty_list_never_prompts() {
        let err = select_run(&[], &Unreachable, now(), &ColorScheme::new(false, true)).unwrap_err();
        assert_eq!(err.to_string(), "found no runs to view");
    }
}
